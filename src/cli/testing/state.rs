use crate::base;

/// The expected or actual objects deserialized from a repo directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    store: Option<base::Store>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets repo's [`base::Store`].
    pub fn with_store<T>(mut self, store: T) -> Self
    where
        T: TryInto<base::Store> + std::fmt::Debug,
        <T as TryInto<base::Store>>::Error: std::fmt::Debug,
    {
        self.store = Some(store.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            store: read!(base::Store),
        }
    }
}

/// Representation of a repo directory's file contents. Unset fields correspond
/// to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    store: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets repo's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets repo's [`base::Store`] file contents.
    pub fn with_store(mut self, s: &'a str) -> Self {
        self.store = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: std::fmt::Debug + base::fs::Serde,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Store>(fs, self.store);
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.store {
            os = os.with_store(s);
        }
        os
    }
}

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}
