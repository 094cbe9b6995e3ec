//! Static emoji-data corpora used across harnesses.
//!
//! Lines are copied from the real unicode.org files (15.1), trimmed to a
//! representative handful including the awkward cases: keycaps, flags,
//! curly quotes, ZWJ sequences and every qualification status.

/// Excerpt of `emoji-test.txt`.
pub const CORPUS_TEST: &[&str] = &[
    "# emoji-test.txt",
    "# This file provides data for testing which emoji forms should be in keyboards",
    "",
    "# group: Smileys & Emotion",
    "",
    "# subgroup: face-smiling",
    "1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face",
    "1F603                                                  ; fully-qualified     # 😃 E0.6 grinning face with big eyes",
    "",
    "# subgroup: face-affection",
    "1F970                                                  ; fully-qualified     # 🥰 E11.0 smiling face with hearts",
    "263A FE0F                                              ; fully-qualified     # \u{263A}\u{FE0F} E0.6 smiling face",
    "263A                                                   ; unqualified         # ☺ E0.6 smiling face",
    "",
    "# subgroup: face-fog",
    "1F636 200D 1F32B FE0F                                  ; fully-qualified     # \u{1F636}\u{200D}\u{1F32B}\u{FE0F} E13.1 face in clouds",
    "1F636 200D 1F32B                                       ; minimally-qualified # 😶‍🌫 E13.1 face in clouds",
    "",
    "# subgroup: skin-tone",
    "1F3FB                                                  ; component           # 🏻 E1.0 light skin tone",
    "",
    "# subgroup: clothing",
    "1F452                                                  ; fully-qualified     # 👒 E0.6 woman\u{2019}s hat",
    "",
    "# subgroup: keycap",
    "0023 FE0F 20E3                                         ; fully-qualified     # #\u{FE0F}\u{20E3} E0.6 keycap: #",
    "0023 20E3                                              ; unqualified         # #⃣ E0.6 keycap: #",
    "",
    "# subgroup: country-flag",
    "1F1FA 1F1F8                                            ; fully-qualified     # \u{1F1FA}\u{1F1F8} E2.0 flag: United States",
    "",
    "# subgroup: animal & nature",
    "1F415                                                  ; fully-qualified     # 🐕 E0.7 dog",
    "",
    "#EOF",
];

/// `(glyph, description, subgroup)` for every record [`CORPUS_TEST`] yields,
/// in order.
pub const CORPUS_TEST_EXPECTED: &[(&str, &str, &str)] = &[
    ("😀", "grinning-face", "face-smiling"),
    ("😃", "grinning-face-with-big-eyes", "face-smiling"),
    ("🥰", "smiling-face-with-hearts", "face-affection"),
    ("\u{263A}\u{FE0F}", "smiling-face", "face-affection"),
    ("\u{1F636}\u{200D}\u{1F32B}\u{FE0F}", "face-in-clouds", "face-fog"),
    ("👒", "womans-hat", "clothing"),
    ("#\u{FE0F}\u{20E3}", "keycap-#", "keycap"),
    ("\u{1F1FA}\u{1F1F8}", "flag-United-States", "country-flag"),
    ("🐕", "dog", "animal-and-nature"),
];

/// Excerpt of `emoji-sequences.txt`.
pub const CORPUS_SEQUENCES: &[&str] = &[
    "# emoji-sequences.txt",
    "# Format:",
    "#   code_point(s) ; type_field ; description # comments",
    "",
    "231A..231B    ; Basic_Emoji                  ; watch..hourglass done                                          # E0.6   [2] (⌚..⌛)",
    "1F600         ; Basic_Emoji                  ; grinning face                                                  # E1.0   [1] (😀)",
    "0023 FE0F 20E3; Emoji_Keycap_Sequence        ; keycap: \\x{23}                                                # E0.6   [1] (#️⃣)",
    "1F1FA 1F1F8   ; RGI_Emoji_Flag_Sequence      ; flag: United States                                            # E2.0   [1] (🇺🇸)",
    "",
    "#EOF",
];

/// `(code points, description)` for every record [`CORPUS_SEQUENCES`] yields.
pub const CORPUS_SEQUENCES_EXPECTED: &[(&str, &str)] = &[
    ("231A", "watch"),
    ("231B", "hourglass done"),
    ("1F600", "grinning face"),
    ("0023 FE0F 20E3", "keycap: \\x{23}"),
    ("1F1FA 1F1F8", "flag: United States"),
];

/// Write `lines` joined with `\n` to `dir/name` and return the path.
pub fn write_fixture(dir: &std::path::Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, lines.join("\n")).expect("write fixture");
    path
}
