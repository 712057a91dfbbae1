use crate::base;

/// Application filesystem, anchored at a repository directory.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Marker for types that are serialized to or deserialized from files.
pub trait Serde: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Serde for base::Config {
    const FILENAME: &'static str = ".spendlog.json";
}
impl Serde for base::Store {
    const FILENAME: &'static str = "expenses_data.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    pub fn is_repo(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    /// Returns the path which `T` will be serialized to and deserialized from.
    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Serde,
    {
        self.dir.join(T::FILENAME)
    }

    /// Deserializes `T` from disk. If `T`'s file does not exist, returns
    /// `T::default()`.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Serde,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let path = self.path::<T>();
        match std::fs::read_to_string(&path) {
            Ok(s) => {
                tracing::debug!(path = %path.display(), bytes = s.len(), "read file");
                s.parse()
                    .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                    .map_err(ReadError::Serde)
            }
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "file missing, using default");
                    Ok(T::default())
                }
                _ => Err(ReadError::Io(e)),
            },
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Serde,
    {
        let path = self.path::<T>();
        let s = obj.to_string();
        std::fs::write(&path, &s)?;
        tracing::debug!(path = %path.display(), bytes = s.len(), "wrote file");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] Box<dyn std::error::Error + Send + Sync>),
}
