use log::error;

pub trait ResultExt<T, E> {
    /// Logs an error if the result is an error and returns the value, if any.
    fn ok_or_log_error(self) -> Option<T>;

    /// Log a warning if there is an `Err`, but only log the exact same message once.
    ///
    /// Meant for callbacks that run for every delivered message.
    fn warn_on_err_once(self, msg: impl std::fmt::Display) -> Option<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: std::fmt::Display,
{
    #[track_caller]
    fn ok_or_log_error(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let loc = std::panic::Location::caller();
                error!("{}:{} {err}", loc.file(), loc.line());
                None
            }
        }
    }

    fn warn_on_err_once(self, msg: impl std::fmt::Display) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                crate::warn_once!("{msg}: {err}");
                None
            }
        }
    }
}
