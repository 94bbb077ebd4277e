use crate::{
    common::*,
    letterbox::{letterbox, resize_exact},
    probe,
};
use bbox::{CornerRect, LetterboxGeometry, Size};
use label::Label;
use rayon::prelude::*;

/// Image extensions probed when pairing a label file with its image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Per-batch counters reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Files rewritten or written successfully.
    pub converted: usize,
    /// Label files without a matching image, left untouched.
    pub unresolved: usize,
    /// Lines dropped because they failed to parse.
    pub skipped_lines: usize,
}

impl BatchSummary {
    fn merge(mut self, other: Self) -> Self {
        self.converted += other.converted;
        self.unresolved += other.unresolved;
        self.skipped_lines += other.skipped_lines;
        self
    }
}

/// Rewrite every corner-format label file under `labels_dir` with
/// coordinates normalized to the `target` letterbox canvas.
///
/// Label files pair with images in `images_dir` by file stem. A label file
/// with no image is reported and left untouched; the batch continues.
/// Every surviving line keeps its class id and position. Files are
/// independent, so they are processed in parallel.
pub fn normalize_labels(
    labels_dir: impl AsRef<Path>,
    images_dir: impl AsRef<Path>,
    target: &Size<u32>,
    strict: bool,
) -> Result<BatchSummary> {
    let images_dir = images_dir.as_ref();
    let target = target.clone().cast::<f64>();

    list_label_files(labels_dir.as_ref())?
        .par_iter()
        .map(|label_file| -> Result<BatchSummary> {
            let image_file = match find_image_for(images_dir, label_file) {
                Some(path) => path,
                None => {
                    warn!("no image found for label file '{}'", label_file.display());
                    return Ok(BatchSummary {
                        unresolved: 1,
                        ..Default::default()
                    });
                }
            };

            let original = probe::probe_size(&image_file)?;
            let geometry = LetterboxGeometry::try_new(&original.cast(), &target)?;

            let skipped_lines = rewrite_labels(label_file, strict, |label| {
                label.normalize(&geometry).to_string()
            })?;
            info!("normalized labels in '{}'", label_file.display());

            Ok(BatchSummary {
                converted: 1,
                skipped_lines,
                ..Default::default()
            })
        })
        .try_reduce(BatchSummary::default, |lhs, rhs| Ok(lhs.merge(rhs)))
}

/// Rewrite `class x1 y1 x2 y2` label files under `labels_dir` in
/// `class cx cy w h` form.
pub fn center_labels(labels_dir: impl AsRef<Path>, strict: bool) -> Result<BatchSummary> {
    list_label_files(labels_dir.as_ref())?
        .par_iter()
        .map(|label_file| -> Result<BatchSummary> {
            let skipped_lines =
                rewrite_labels(label_file, strict, |label| label.to_center().to_string())?;
            info!("converted labels in '{}'", label_file.display());

            Ok(BatchSummary {
                converted: 1,
                skipped_lines,
                ..Default::default()
            })
        })
        .try_reduce(BatchSummary::default, |lhs, rhs| Ok(lhs.merge(rhs)))
}

/// Letterbox every image under `input_dir` to `target`, mirroring the
/// directory layout under `output_dir`. With `keep_aspect` off the images
/// are plain-resized instead.
pub fn letterbox_images(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    target: &Size<u32>,
    fill: u8,
    keep_aspect: bool,
) -> Result<BatchSummary> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    list_image_files(input_dir)?
        .par_iter()
        .map(|input_file| -> Result<BatchSummary> {
            let img = image::open(input_file)
                .with_context(|| format!("cannot read image '{}'", input_file.display()))?;
            let resized = if keep_aspect {
                letterbox(&img, target, fill)?
            } else {
                resize_exact(&img, target)
            };

            let rel = input_file.strip_prefix(input_dir).unwrap_or(input_file);
            let output_file = output_dir.join(rel);
            if let Some(parent) = output_file.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create directory '{}'", parent.display()))?;
            }
            resized
                .save(&output_file)
                .with_context(|| format!("cannot write image '{}'", output_file.display()))?;

            Ok(BatchSummary {
                converted: 1,
                ..Default::default()
            })
        })
        .try_reduce(BatchSummary::default, |lhs, rhs| Ok(lhs.merge(rhs)))
}

/// Rewrite the label file wholesale: parse each line, format it through
/// `transform`, keep line order. Lines that fail to parse are skipped with
/// a warning, or fail the file in strict mode. Blank lines are dropped
/// silently.
fn rewrite_labels(
    path: &Path,
    strict: bool,
    transform: impl Fn(Label<CornerRect<f64>>) -> String,
) -> Result<usize> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read label file '{}'", path.display()))?;

    let mut lines = Vec::new();
    let mut skipped = 0;
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match Label::from_corner_line(line) {
            Ok(label) => lines.push(transform(label)),
            Err(err) if strict => {
                return Err(err.context(format!("{}:{}", path.display(), index + 1)));
            }
            Err(err) => {
                warn!("{}:{}: skipping line: {:#}", path.display(), index + 1, err);
                skipped += 1;
            }
        }
    }

    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)
        .with_context(|| format!("cannot write label file '{}'", path.display()))?;
    Ok(skipped)
}

fn list_label_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.txt");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-unicode path '{}'", pattern.display()))?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)?.try_collect()?;
    files.sort();
    Ok(files)
}

fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("**").join("*");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-unicode path '{}'", pattern.display()))?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)?
        .filter_ok(|path| is_image_file(path))
        .try_collect()?;
    files.sort();
    Ok(files)
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn find_image_for(images_dir: &Path, label_file: &Path) -> Option<PathBuf> {
    let stem = label_file.file_stem()?;
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| {
            let mut name = stem.to_os_string();
            name.push(".");
            name.push(ext);
            images_dir.join(name)
        })
        .find(|candidate| candidate.is_file())
}
