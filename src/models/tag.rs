use serde::Serialize;

/// Category markers encoded as single letters inside an event title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    Regular,      // n
    UnpaidDayOff, // u
    PaidDayOff,   // p
    Night,        // d
    Phone,        // t
    CallIn,       // w
}

impl Tag {
    pub const ALL: [Tag; 6] = [
        Tag::Regular,
        Tag::UnpaidDayOff,
        Tag::PaidDayOff,
        Tag::Night,
        Tag::Phone,
        Tag::CallIn,
    ];

    pub fn letter(&self) -> char {
        match self {
            Tag::Regular => 'n',
            Tag::UnpaidDayOff => 'u',
            Tag::PaidDayOff => 'p',
            Tag::Night => 'd',
            Tag::Phone => 't',
            Tag::CallIn => 'w',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        Tag::ALL.into_iter().find(|t| t.letter() == lower)
    }

    fn bit(&self) -> u8 {
        match self {
            Tag::Regular => 1,
            Tag::UnpaidDayOff => 1 << 1,
            Tag::PaidDayOff => 1 << 2,
            Tag::Night => 1 << 3,
            Tag::Phone => 1 << 4,
            Tag::CallIn => 1 << 5,
        }
    }
}

/// Day-off marker carried by a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayOff {
    Unpaid,
    Paid,
}

/// Set of tags found in a single title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u8);

impl TagSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.into_iter().filter(|t| self.contains(*t))
    }

    pub fn is_day_off(&self) -> bool {
        self.day_off().is_some()
    }

    /// `p` wins over `u` when both are present: the paid credit applies.
    pub fn day_off(&self) -> Option<DayOff> {
        if self.contains(Tag::PaidDayOff) {
            Some(DayOff::Paid)
        } else if self.contains(Tag::UnpaidDayOff) {
            Some(DayOff::Unpaid)
        } else {
            None
        }
    }

    /// Letters of the contained tags, in canonical order (e.g. "nt").
    pub fn letters(&self) -> String {
        self.iter().map(|t| t.letter()).collect()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::empty();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
