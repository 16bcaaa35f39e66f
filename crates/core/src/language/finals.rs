//! Inventory of canonical rhyme finals.
//!
//! Each final carries an example hanji and the vowel/coda/nasal features
//! the segmenter derives for it, so a syllable can be filed under its
//! final by comparing features.

use serde::Serialize;

use super::diacritics::normalize;
use super::segment::segment;
use crate::types::SyllableFeatures;

/// `(final, example hanji)`, grouped by nucleus. An empty hanji means
/// no common example.
#[rustfmt::skip]
pub const FINALS: [(&str, &str); 75] = [
    // a
    ("a", "巴"), ("aⁿ", "三"), ("am", "掩"), ("an", "安"), ("ang", "紅"),
    ("ap", "壓"), ("at", "遏"), ("ak", "握"), ("ah", "鴨"), ("ahⁿ", "唅"),
    // ai
    ("ai", "哀"), ("aiⁿ", "喈"), ("aih", "哎"), ("aihⁿ", ""),
    // au
    ("au", "歐"), ("auh", "𩛩"),
    // e
    ("e", "矮"), ("eⁿ", "嬰"), ("eh", "厄"), ("ehⁿ", ""),
    // i
    ("i", "伊"), ("im", "音"), ("in", "因"), ("ip", "入"), ("it", "食"), ("ih", "滴"),
    ("ihⁿ", ""),
    // ia
    ("ia", "命"), ("iaⁿ", "影"), ("iam", "鹽"), ("ian", "緣"), ("iap", "葉"),
    ("iat", "擛"), ("iak", "摔"), ("iah", "頁"), ("iahⁿ", ""),
    // iau
    ("iau", "夭"), ("iauⁿ", ""), ("iauh", ""),
    // io, with the e finals heard alongside it
    ("io", "腰"), ("eng", "英"), ("ek", "易"), ("ioh", "臆"),
    // iong
    ("iong", "用"), ("iok", "欲"),
    // iu
    ("iu", "右"), ("iuⁿ", "洋"), ("iuh", ""), ("iuhⁿ", ""),
    // o
    ("o", "高"), ("oh", "學"),
    // o͘
    ("o\u{358}", "烏"), ("oⁿ", ""), ("om", "參"), ("ong", "王"), ("ohⁿ", ""), ("ok", "惡"),
    // oa
    ("oa", "沙"), ("oaⁿ", "官"), ("oan", "遠"), ("oat", "越"), ("oah", "活"),
    // oai
    ("oai", "歪"), ("oaiⁿ", "關"),
    // oe
    ("oe", "話"), ("oeh", "郭"),
    // u
    ("u", "羽"), ("un", "韻"), ("ut", "鬱"), ("uh", "欶"),
    // ui
    ("ui", "為"),
    // syllabic m
    ("m", "毋"), ("mh", ""),
    // syllabic ng
    ("ng", "黃"), ("ngh", ""),
];

/// A canonical final with its derived features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeFinal {
    /// 1-based position in [`FINALS`]
    pub id: u32,
    pub lomaji: &'static str,
    pub hanji: Option<&'static str>,
    pub vowel: String,
    pub coda: Option<String>,
    pub nasal: bool,
}

impl RhymeFinal {
    fn matches(&self, features: &SyllableFeatures) -> bool {
        self.vowel == features.vowel && self.coda == features.coda && self.nasal == features.nasal
    }
}

lazy_static::lazy_static! {
    static ref RHYME_FINALS: Vec<RhymeFinal> = FINALS
        .iter()
        .enumerate()
        .map(|(i, (lomaji, hanji))| {
            let segments = segment(lomaji);
            RhymeFinal {
                id: i as u32 + 1,
                lomaji: *lomaji,
                hanji: Some(*hanji).filter(|h| !h.is_empty()),
                vowel: segments.vowel,
                coda: segments.coda,
                nasal: segments.nasal,
            }
        })
        .collect();
}

/// Every final, in inventory order.
pub fn finals() -> &'static [RhymeFinal] {
    &RHYME_FINALS
}

/// A final by its spelling.
pub fn find_final(lomaji: &str) -> Option<&'static RhymeFinal> {
    let lomaji = normalize(lomaji);
    RHYME_FINALS.iter().find(|f| f.lomaji == lomaji)
}

/// The final a syllable rhymes on, if it is in the inventory.
pub fn final_of(features: &SyllableFeatures) -> Option<&'static RhymeFinal> {
    if !features.is_resolved() {
        return None;
    }
    RHYME_FINALS.iter().find(|f| f.matches(features))
}
