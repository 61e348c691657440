use crate::utils::error::Result;

/// Where target files live. Names are resolved relative to the storage root.
pub trait Storage {
    fn exists(&self, name: &str) -> bool;

    /// Whole-file read decoded as UTF-8.
    fn read_text(&self, name: &str) -> Result<String>;

    /// Whole-file overwrite, UTF-8 encoded.
    fn write_text(&self, name: &str, text: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn read_text(&self, name: &str) -> Result<String> {
        (**self).read_text(name)
    }

    fn write_text(&self, name: &str, text: &str) -> Result<()> {
        (**self).write_text(name, text)
    }
}
