use global_common::Span;
use serde::ser::SerializeMap;

/// Writes the leading `type`/`start`/`end` entries shared by every node
/// with a hand-written `Serialize` impl.
pub(crate) fn head<M>(map: &mut M, ty: &str, span: Span) -> Result<(), M::Error>
where
    M: SerializeMap,
{
    map.serialize_entry("type", ty)?;
    map.serialize_entry("start", &span.lo)?;
    map.serialize_entry("end", &span.hi)
}
