//! `motif show`

use std::path::Path;

use motif_motion::{Gallery, MotionConfig, Presentation};
use motif_seed::IntensityLevel;

pub struct ShowOptions<'a> {
    pub variant: &'a str,
    pub seed: &'a str,
    pub intensity: Option<IntensityLevel>,
    pub reduced_motion: bool,
    pub json: bool,
    pub config: Option<&'a Path>,
}

pub fn run(opts: &ShowOptions<'_>) -> anyhow::Result<()> {
    let mut config = match opts.config {
        Some(path) => MotionConfig::load(path)?,
        None => MotionConfig::default(),
    };
    config.apply_env();

    let intensity = opts.intensity.unwrap_or(config.intensity);
    let mut gallery = Gallery::new(config);
    gallery.set_reduced_motion(opts.reduced_motion);

    // Unknown names render nothing, same as on a page.
    let Some(presentation) = gallery
        .mount(opts.variant, opts.seed, intensity)
        .and_then(|id| gallery.render(id))
    else {
        return Ok(());
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&presentation)?);
    } else {
        print!("{}", summary(&presentation, opts.seed, intensity));
    }
    Ok(())
}

fn summary(p: &Presentation, seed: &str, intensity: IntensityLevel) -> String {
    let d = p.descriptor();
    let canvas = d.canvas();
    let look = d.appearance();
    let mut out = String::new();
    out.push_str(&format!("variant    {} ({})\n", d.variant(), d.variant().family().name()));
    out.push_str(&format!("seed       {seed:?}\n"));
    out.push_str(&format!("intensity  {intensity}\n"));
    out.push_str(&format!("canvas     {}x{}\n", canvas.width, canvas.height));
    out.push_str(&format!("elements   {}\n", d.element_count()));
    out.push_str(&format!("opacity    {:.3}\n", look.opacity));
    out.push_str(&format!("stroke     {:.3}\n", look.stroke_width));
    match p {
        Presentation::Animated(scene) => {
            out.push_str(&format!("mode       animated, {} tracks\n", scene.tracks.len()));
            for t in &scene.tracks {
                out.push_str(&format!(
                    "  {}[{}] {:?} {:?} {:.2}s +{:.2}s\n",
                    t.part, t.index, t.property, t.keyframes, t.duration, t.delay
                ));
            }
        }
        Presentation::Static(scene) => {
            out.push_str(&format!("mode       static, {} poses\n", scene.poses.len()));
            for pose in &scene.poses {
                out.push_str(&format!(
                    "  {}[{}] {:?} = {:.3}\n",
                    pose.part, pose.index, pose.property, pose.value
                ));
            }
        }
    }
    out
}
