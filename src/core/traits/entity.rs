/// A domain record with a server-assigned identifier.
///
/// The identifier is absent before first persistence and immutable
/// afterwards. `NAME` is the lowercase entity tag used in alert headers and
/// error payloads.
pub trait Entity: Clone + Send + Sync {
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);
}
