use serde::{Deserialize, Serialize};

/// Minimum width of the frame number in a frame file name
pub const FRAME_NUMBER_WIDTH: usize = 4;

/// Extension of every frame file
pub const FRAME_EXTENSION: &str = "png";

/// One animated image element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Identifier of the target image element
    pub id: String,

    /// File name prefix shared by every frame of this track
    pub image_prefix: String,

    /// Directory holding the frame files
    pub image_dir: String,

    /// Frame count, only used when each track advances on its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_images: Option<usize>,
}

impl Track {
    pub fn new(id: &str, image_prefix: &str, image_dir: &str) -> Self {
        Self {
            id: id.to_string(),
            image_prefix: image_prefix.to_string(),
            image_dir: image_dir.to_string(),
            num_images: None,
        }
    }

    /// Same track with its own frame count
    pub fn with_frames(mut self, num_images: usize) -> Self {
        self.num_images = Some(num_images);
        self
    }

    /// Path of this track's frame `index`
    pub fn source_for(&self, index: usize) -> String {
        frame_path(&self.image_dir, &self.image_prefix, index)
    }
}

/// `<prefix><index>.png`, with the index left-padded with zeros to four digits.
///
/// Wider indices keep all of their digits.
pub fn frame_file_name(prefix: &str, index: usize) -> String {
    format!(
        "{}{:0width$}.{}",
        prefix,
        index,
        FRAME_EXTENSION,
        width = FRAME_NUMBER_WIDTH
    )
}

/// `<dir>/<frame file name>`
pub fn frame_path(dir: &str, prefix: &str, index: usize) -> String {
    format!("{}/{}", dir, frame_file_name(prefix, index))
}
