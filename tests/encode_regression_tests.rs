//! Integration tests for badge symbol encoding
//!
//! These pin down the behavior badge printing depends on: fixed symbol shape,
//! the 62-byte truncation boundary, structural patterns, and that every
//! symbol reads back to the bytes that went in.

use badge_qr::encoder::codewords;
use badge_qr::encoder::qr_encoder::QrEncoder;
use badge_qr::{Encoder, MAX_DATA_BYTES, MaskPattern, QrSymbol, encode, encode_batch, read_symbol};

fn assert_finder_at(symbol: &QrSymbol, top: usize, left: usize) {
    for r in 0..7 {
        for c in 0..7 {
            let ring = r == 0 || r == 6 || c == 0 || c == 6;
            let core = (2..=4).contains(&r) && (2..=4).contains(&c);
            assert_eq!(
                symbol.is_dark(top + r, left + c),
                ring || core,
                "finder at ({}, {}) cell ({}, {})",
                top,
                left,
                r,
                c
            );
        }
    }
}

#[test]
fn test_empty_input() {
    let symbol = encode("");
    assert_eq!(symbol.module_count, 33);
    assert!(!symbol.truncated);
    assert_finder_at(&symbol, 0, 0);
    assert!(read_symbol(&symbol).unwrap().is_empty());
}

#[test]
fn test_finders_and_separators() {
    let symbol = encode("Margaret Hamilton");
    assert_finder_at(&symbol, 0, 0);
    assert_finder_at(&symbol, 0, 26);
    assert_finder_at(&symbol, 26, 0);
    for i in 0..8 {
        assert!(!symbol.is_dark(7, i), "top-left separator row");
        assert!(!symbol.is_dark(i, 7), "top-left separator column");
        assert!(!symbol.is_dark(7, 32 - i), "top-right separator row");
        assert!(!symbol.is_dark(32 - i, 7), "bottom-left separator column");
    }
}

#[test]
fn test_timing_alignment_and_dark_module() {
    let symbol = encode("Margaret Hamilton");
    for i in 8..25 {
        assert_eq!(symbol.is_dark(6, i), i % 2 == 0, "timing row at {}", i);
        assert_eq!(symbol.is_dark(i, 6), i % 2 == 0, "timing column at {}", i);
    }
    // Alignment pattern centred at (26, 26)
    for r in 24..=28 {
        for c in 24..=28 {
            let ring = r == 24 || r == 28 || c == 24 || c == 28;
            let centre = r == 26 && c == 26;
            assert_eq!(symbol.is_dark(r, c), ring || centre);
        }
    }
    assert!(symbol.is_dark(25, 8));
}

#[test]
fn test_truncation_boundary() {
    let exact = "a".repeat(MAX_DATA_BYTES);
    let over = format!("{}b", exact);

    let fits = encode(&exact);
    let cut = encode(&over);
    assert!(!fits.truncated);
    assert!(cut.truncated);
    // Only the first 62 bytes reach the codewords
    assert_eq!(fits.modules, cut.modules);
    assert_eq!(read_symbol(&cut).unwrap(), exact.as_bytes());
}

#[test]
fn test_truncation_can_split_a_character() {
    // 61 ASCII bytes then a 2-byte character: byte 62 is a lead byte
    let text = format!("{}é", "x".repeat(61));
    let symbol = encode(&text);
    assert!(symbol.truncated);
    let bytes = read_symbol(&symbol).unwrap();
    assert_eq!(bytes.len(), MAX_DATA_BYTES);
    assert_eq!(bytes[61], 0xC3);
}

#[test]
fn test_deterministic() {
    for text in ["", "Ngozi Okonjo", "山田太郎", "José Álvarez-Müller"] {
        assert_eq!(encode(text), encode(text));
    }
}

#[test]
fn test_distinct_inputs_differ() {
    let names = ["Alice Smith", "Alice Smyth", "Bruce Wayne", "Bruce Wayno"];
    for (i, a) in names.iter().enumerate() {
        for b in names.iter().skip(i + 1) {
            assert_eq!(a.len(), b.len());
            assert_ne!(encode(a).modules, encode(b).modules, "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_selected_mask_is_optimal() {
    let symbol = encode("Katherine Johnson");
    let codewords = codewords::build(b"Katherine Johnson");
    let candidates = QrEncoder::candidates(&codewords, false);
    assert_eq!(candidates.len(), 8);
    for candidate in &candidates {
        assert!(symbol.penalty <= candidate.penalty);
    }
    let first_best = candidates
        .iter()
        .find(|c| c.penalty == symbol.penalty)
        .map(|c| c.mask_pattern);
    assert_eq!(first_best, Some(symbol.mask_pattern));
}

#[test]
fn test_parallel_scoring_matches_sequential() {
    let codewords = codewords::build("Grace Brewster Murray".as_bytes());
    let sequential = QrEncoder::candidates(&codewords, false);
    let parallel = QrEncoder::candidates(&codewords, true);
    for (s, p) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(s.mask_pattern, p.mask_pattern);
        assert_eq!(s.matrix, p.matrix);
        assert_eq!(s.penalty, p.penalty);
    }
    let masks: Vec<MaskPattern> = parallel.iter().map(|c| c.mask_pattern).collect();
    assert_eq!(masks, MaskPattern::ALL.to_vec());
}

#[test]
fn test_read_back_roster() {
    let roster = [
        "Ada Lovelace",
        "Søren Kierkegaard",
        "Đặng Thái Sơn",
        "Αλέξανδρος",
        "O'Brien, Siobhán",
        "👩‍💻 Priya",
    ];
    for (name, symbol) in roster.iter().zip(encode_batch(&roster)) {
        assert!(!symbol.truncated);
        assert_eq!(read_symbol(&symbol).unwrap(), name.as_bytes(), "{}", name);
    }
}

#[test]
fn test_cached_encoder_matches_free_function() {
    let mut encoder = Encoder::with_cache_capacity(4);
    for name in ["Rin", "Sol", "Rin", "Tao", "Sol"] {
        assert_eq!(encoder.encode(name), encode(name));
    }
    let stats = encoder.cache_stats().unwrap();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 3);
}
