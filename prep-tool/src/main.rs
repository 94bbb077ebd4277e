use anyhow::Result;
use bbox::Size;
use clap::Parser;
use dataset_prep::{
    center_labels, letterbox_images, normalize_labels, BatchSummary, DEFAULT_FILL,
};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
enum Opts {
    /// Letterbox every image under a directory tree to the target size.
    Resize {
        /// input image directory
        input_dir: PathBuf,
        /// output image directory
        output_dir: PathBuf,
        /// target canvas width
        #[clap(long, default_value_t = 640)]
        width: u32,
        /// target canvas height
        #[clap(long, default_value_t = 640)]
        height: u32,
        /// canvas fill value
        #[clap(long, default_value_t = DEFAULT_FILL)]
        fill: u8,
        /// plain resize without aspect-ratio preservation
        #[clap(long)]
        no_letterbox: bool,
    },
    /// Rewrite corner-format label files as normalized letterbox
    /// coordinates.
    NormalizeLabels {
        /// label directory
        labels_dir: PathBuf,
        /// paired image directory
        images_dir: PathBuf,
        /// target canvas width
        #[clap(long, default_value_t = 640)]
        width: u32,
        /// target canvas height
        #[clap(long, default_value_t = 640)]
        height: u32,
        /// fail on malformed label lines instead of skipping them
        #[clap(long)]
        strict: bool,
    },
    /// Rewrite corner-format label files in center format.
    CenterLabels {
        /// label directory
        labels_dir: PathBuf,
        /// fail on malformed label lines instead of skipping them
        #[clap(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let summary = match Opts::parse() {
        Opts::Resize {
            input_dir,
            output_dir,
            width,
            height,
            fill,
            no_letterbox,
        } => letterbox_images(
            input_dir,
            output_dir,
            &Size::try_from_wh(width, height)?,
            fill,
            !no_letterbox,
        )?,
        Opts::NormalizeLabels {
            labels_dir,
            images_dir,
            width,
            height,
            strict,
        } => normalize_labels(
            labels_dir,
            images_dir,
            &Size::try_from_wh(width, height)?,
            strict,
        )?,
        Opts::CenterLabels { labels_dir, strict } => center_labels(labels_dir, strict)?,
    };

    report(&summary);
    Ok(())
}

fn report(summary: &BatchSummary) {
    info!(
        "{} files converted, {} unresolved, {} lines skipped",
        summary.converted, summary.unresolved, summary.skipped_lines
    );
}
