/// Body returned for any request that matches no route.
pub const NO_SUCH_PATH: &str = "Error! No such path!";

/// Catch-all for unknown paths and for known paths hit with an unsupported
/// method. Responds `200 OK` with a fixed text body.
pub async fn no_such_path() -> &'static str {
    NO_SUCH_PATH
}
