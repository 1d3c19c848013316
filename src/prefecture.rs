/// Prefecture names in JIS X 0401 order. Index 0 is the empty "no prefecture" slot,
/// so a prefecture's index equals its JIS prefecture code.
#[rustfmt::skip]
pub const PREFECTURES: [&str; 48] = [
    "", "北海道", "青森県", "岩手県", "宮城県",
    "秋田県", "山形県", "福島県", "茨城県", "栃木県",
    "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県",
    "新潟県", "富山県", "石川県", "福井県", "山梨県",
    "長野県", "岐阜県", "静岡県", "愛知県", "三重県",
    "滋賀県", "京都府", "大阪府", "兵庫県", "奈良県",
    "和歌山県", "鳥取県", "島根県", "岡山県", "広島県",
    "山口県", "徳島県", "香川県", "愛媛県", "高知県",
    "福岡県", "佐賀県", "長崎県", "熊本県", "大分県",
    "宮崎県", "鹿児島県", "沖縄県",
];

/// Returned by [`index_of`] when the name is not in the table.
pub const UNKNOWN_PREFECTURE: i32 = -1;

/// Position of `name` in [`PREFECTURES`], or [`UNKNOWN_PREFECTURE`].
///
/// An empty name matches the sentinel slot and yields 0.
pub fn index_of(name: &str) -> i32 {
    PREFECTURES
        .iter()
        .position(|p| *p == name)
        .map_or(UNKNOWN_PREFECTURE, |i| i as i32)
}

/// Name stored at `index`. Negative or out-of-range indices are `None`.
pub fn name(index: i32) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| PREFECTURES.get(i).copied())
}
