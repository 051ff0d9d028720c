use keytone_events::SoundCategory;
use std::path::{Path, PathBuf};

/// Directory holding one clip per sound category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundLibrary {
    dir: PathBuf,
}

impl SoundLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the clip for `category`.
    pub fn clip(&self, category: SoundCategory) -> PathBuf {
        self.dir.join(category.file_name())
    }

    /// Clips whose file is missing on disk.
    pub fn missing(&self) -> Vec<PathBuf> {
        SoundCategory::ALL
            .iter()
            .map(|c| self.clip(*c))
            .filter(|p| !p.is_file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_paths() {
        let library = SoundLibrary::new("/opt/keytone/audio");
        assert_eq!(
            library.clip(SoundCategory::Spacebar),
            PathBuf::from("/opt/keytone/audio/spacebar.wav")
        );
    }

    #[test]
    fn test_missing_lists_every_clip_for_empty_dir() {
        let library = SoundLibrary::new("/nonexistent/keytone");
        assert_eq!(library.missing().len(), SoundCategory::ALL.len());
    }
}
