use std::fmt;
use std::path::{Path, PathBuf};

const MUSIC_PREFIX: &str = "Music_";
const SFX_PREFIX: &str = "SFX_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Music,
    Sfx,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Music, Category::Sfx, Category::Other];

    pub fn folder_name(self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Sfx => "SFX",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

/// Where the decoded streams of one bank end up, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub category: Category,
    pub subfolder: String,
}

impl Destination {
    pub fn under(&self, output_root: &Path) -> PathBuf {
        output_root
            .join(self.category.folder_name())
            .join(&self.subfolder)
    }
}

/// Maps a bank file name onto its destination. Every bank gets its own subfolder
/// named after the file without its extension, including SFX banks.
pub fn classify(file_name: &str) -> Destination {
    let category = if file_name.starts_with(MUSIC_PREFIX) {
        Category::Music
    } else if file_name.starts_with(SFX_PREFIX) {
        Category::Sfx
    } else {
        Category::Other
    };

    Destination {
        category,
        subfolder: strip_extension(file_name).to_string(),
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) if index > 0 => &file_name[..index],
        _ => file_name,
    }
}
