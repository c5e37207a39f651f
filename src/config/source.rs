use std::env::VarError;

/// Where [`ConfigLoader`][super::ConfigLoader] reads variables from.
///
/// In production this is always [`ProcessEnv`]; tests swap in a map so they don't have to
/// mutate the environment of a process that's running other tests in parallel.
pub trait EnvSource {
    /// Look up a single variable, with the same contract as [`std::env::var()`].
    fn var(&self, name: &str) -> Result<String, VarError>;
}

/// The environment of the current process.
///
/// If a `.env` file should be honored, load it into the process with `dotenv` before the
/// first [`ConfigLoader::get()`][super::ConfigLoader::get].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Result<String, VarError> {
        std::env::var(name)
    }
}

// Lets a caller hand the loader `&source` and keep using the source itself.
impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Result<String, VarError> {
        (**self).var(name)
    }
}
