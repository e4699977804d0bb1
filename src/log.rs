//! Thin wrapper over the `log` facade so call sites read like
//! `log::warn(&msg)` instead of the macro form, matching the rest of the
//! crate's function-call style. Installing an actual logger (env_logger,
//! or anything else implementing `log::Log`) is the front end's job; the
//! core only ever emits records.

pub(crate) fn warn(msg: &str) {
    log::warn!("{msg}");
}

pub(crate) fn error(msg: &str) {
    log::error!("{msg}");
}

pub(crate) fn info(msg: &str) {
    log::info!("{msg}");
}

pub(crate) fn debug(msg: &str) {
    log::debug!("{msg}");
}
