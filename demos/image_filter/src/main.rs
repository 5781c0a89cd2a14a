use argh::FromArgs;
use std::path::PathBuf;

use rasterfx::imgproc::engine::{FilterKind, ImageFilterEngine};
use rasterfx::io::{functional as F, sink::FileSink};

#[derive(FromArgs)]
/// Apply pixel and neighborhood filters to an image and write one file per filter
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// filter to apply, repeatable: invert, greyscale, blackwhite, removecolor[:r|g|b], sepia,
    /// double, average, median, sobel. Defaults to all of them.
    #[argh(option, short = 'f')]
    filter: Vec<FilterKind>,

    /// directory to write the outputs to, next to the input by default
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let filters = if args.filter.is_empty() {
        FilterKind::ALL.to_vec()
    } else {
        args.filter
    };

    // read the image
    let image = F::read_image_any_rgb8(&args.image_path)?;
    log::info!("loaded {} ({})", args.image_path.display(), image.size());

    let engine = ImageFilterEngine::new(image);

    let mut sink = FileSink::new(&args.image_path);
    if let Some(output_dir) = args.output_dir {
        std::fs::create_dir_all(&output_dir)?;
        sink = sink.with_output_dir(output_dir);
    }

    engine.run_all(&filters, &mut sink)?;

    for path in sink.written() {
        println!("{}", path.display());
    }

    Ok(())
}
