use crate::common::*;
use bbox::Size;

/// Image dimensions read from the file header, without decoding pixel
/// data.
pub fn probe_size(path: impl AsRef<Path>) -> Result<Size<u32>> {
    let path = path.as_ref();
    let imagesize::ImageSize { width, height } = imagesize::size(path)
        .with_context(|| format!("cannot probe image size of '{}'", path.display()))?;
    Size::try_new(width as u32, height as u32, 3)
}
