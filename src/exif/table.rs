use std::collections::BTreeMap;

use super::value::ExifValue;

/// Tag values of one IFD, keyed by tag id.
pub type Ifd = BTreeMap<u16, ExifValue>;

/// Decoded EXIF attributes of a single image, grouped by IFD.
///
/// Groups are keyed by the ids in [`super::tags`] (`PRIMARY_IFD`,
/// `EXIF_IFD`, ...). Only the primary image is represented; thumbnail IFDs
/// are not kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawExifTable {
    groups: BTreeMap<u16, Ifd>,
}

impl RawExifTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `tag` in `group`, replacing any previous value.
    pub fn insert(&mut self, group: u16, tag: u16, value: ExifValue) {
        self.groups.entry(group).or_default().insert(tag, value);
    }

    /// Builder-style [`RawExifTable::insert`].
    pub fn with(mut self, group: u16, tag: u16, value: ExifValue) -> Self {
        self.insert(group, tag, value);
        self
    }

    /// The tags of `group`, or `None` if the image has no such IFD.
    pub fn ifd(&self, group: u16) -> Option<&Ifd> {
        self.groups.get(&group)
    }

    pub fn get(&self, group: u16, tag: u16) -> Option<&ExifValue> {
        self.groups.get(&group).and_then(|ifd| ifd.get(&tag))
    }

    /// Total number of tags across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::tags::{EXIF_IFD, PRIMARY_IFD, TAG_ISO_SPEED};

    #[test]
    fn groups_are_independent() {
        let table = RawExifTable::new()
            .with(PRIMARY_IFD, TAG_ISO_SPEED, ExifValue::Number(1.0))
            .with(EXIF_IFD, TAG_ISO_SPEED, ExifValue::Number(400.0));

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get(EXIF_IFD, TAG_ISO_SPEED),
            Some(&ExifValue::Number(400.0))
        );
        assert_eq!(
            table.get(PRIMARY_IFD, TAG_ISO_SPEED),
            Some(&ExifValue::Number(1.0))
        );
    }

    #[test]
    fn missing_group_is_none() {
        let table = RawExifTable::new();
        assert!(table.is_empty());
        assert!(table.ifd(EXIF_IFD).is_none());
        assert!(table.get(EXIF_IFD, TAG_ISO_SPEED).is_none());
    }
}
