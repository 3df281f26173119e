#![allow(missing_docs)]

use proptest::prelude::*;
use sylchipper::{
    SylError,
    TokenizerOptions,
    store::{MemoryVocabStore, VocabStore},
    vocab::{LimitBy, Percentile, SyllableLimit},
};

const CORPUS: &[&str] = &[
    "Kitaplar okula geldi.",
    "merhaba dünya, merhaba okul",
    "öğrenciler saat üçte kitaplarını aldı",
    "İstanbul'da şiir okudular",
];

#[test]
fn fit_then_tokenize_reconstructs_words() {
    let mut store = MemoryVocabStore::new();
    let mut tok = TokenizerOptions::default().build();
    tok.fit(["kitaplar okul"], &mut store).unwrap();

    let tokens = tok.tokenize("kitaplar");
    assert_eq!(tokens.replace(' ', ""), "kitaplar");
    assert_eq!(tokens, "ki tap lar");
}

#[test]
fn fit_persists_through_store() {
    let mut store = MemoryVocabStore::new();
    let mut tok = TokenizerOptions::default().build();
    tok.fit(CORPUS, &mut store).unwrap();

    let bytes = store.load_vocab_bytes(tok.language()).unwrap();
    assert!(!bytes.is_empty());

    let loaded = TokenizerOptions::default().load(&mut store).unwrap();
    assert_eq!(loaded.vocab(), tok.vocab());

    let ranked: Vec<&str> = loaded.vocab().iter_ranked().map(|(s, _)| s).collect();
    let expected: Vec<&str> = tok.vocab().iter_ranked().map(|(s, _)| s).collect();
    assert_eq!(ranked, expected);
}

#[test]
fn special_characters_are_syllables() {
    let mut tok = TokenizerOptions::default().build();
    assert_eq!(tok.tokenize("geldi."), "gel di .");
    assert_eq!(tok.tokenize("İstanbul'da"), "is tan bul ' da");
}

#[test]
fn filters_apply_after_fit() {
    let mut store = MemoryVocabStore::new();
    let mut unfiltered = TokenizerOptions::default().build();
    unfiltered.fit(CORPUS, &mut store).unwrap();
    let size = unfiltered.vocab().len();

    let options = TokenizerOptions::parse("tr", "vocabulary", 4.0).unwrap();
    let mut tok = options.load(&mut store).unwrap();
    let report = tok.decode(CORPUS.join(" ").as_str());
    assert!(report.is_complete());
    for syllable in report.syllables() {
        assert!(tok.vocab().get(syllable).unwrap().rank < 4);
    }

    let options = TokenizerOptions::default().with_limit(SyllableLimit::Count(0));
    let mut tok = options.load(&mut store).unwrap();
    assert_eq!(tok.tokenize("merhaba"), "mer ha ba");
    assert_eq!(tok.tokenize("kuş"), "");
    assert_eq!(tok.tokenize("okul kuş merhaba"), "o kul  mer ha ba");
    assert_eq!(tok.vocab().len(), size);
}

#[test]
fn get_id_is_stable_for_unseen_syllables() {
    let mut tok = TokenizerOptions::default().build();
    tok.fit_vocab(CORPUS);
    let size = tok.vocab().len();

    let first = tok.get_id("zzz");
    let second = tok.get_id("zzz");
    assert_eq!(first, second);
    assert_eq!(first, size + 1);
    assert_eq!(tok.vocab().len(), size + 1);
    assert_eq!(tok.vocab().get("zzz").unwrap().percentile, Percentile::Unranked);
}

#[test]
fn inverse_transform_rejects_unknown_ids() {
    let mut tok = TokenizerOptions::default().build();
    tok.fit_vocab(["kitaplar okul"]);

    match tok.inverse_transform(&[999_999u32]) {
        Err(SylError::TokenOutOfRange { id, size }) => {
            assert_eq!(id, 999_999);
            assert_eq!(size, 5);
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(tok.vocab().len(), 5);
}

#[test]
fn unsupported_configuration_is_rejected() {
    assert!(matches!(
        TokenizerOptions::parse("xx", "none", 0.0),
        Err(SylError::UnsupportedLanguage(code)) if code == "xx"
    ));
    assert!(matches!(
        TokenizerOptions::parse("tr", "syllables", 0.0),
        Err(SylError::UnsupportedLimitMode(mode)) if mode == "syllables"
    ));
    assert!(matches!(
        SyllableLimit::new(LimitBy::Percentile, 2.0),
        Err(SylError::InvalidLimit { .. })
    ));
}

#[cfg(feature = "disk")]
#[test]
fn disk_store_round_trip() {
    use sylchipper::disk_cache::{SylchipperDiskCache, SylchipperDiskCacheOptions};

    tempdir::TempDir::new("sylchipper_disk")
        .and_then(|dir| {
            let mut cache = SylchipperDiskCache::new(
                SylchipperDiskCacheOptions::default().with_data_dir(Some(dir.path())),
            )
            .unwrap();

            assert!(matches!(
                TokenizerOptions::default().load(&mut cache),
                Err(SylError::VocabNotFound(_))
            ));

            let mut tok = TokenizerOptions::default().build();
            tok.fit(CORPUS, &mut cache).unwrap();

            let mut loaded = TokenizerOptions::default().load(&mut cache).unwrap();
            assert_eq!(loaded.vocab(), tok.vocab());
            assert_eq!(loaded.tokenize("öğrenciler"), "öğ ren ci ler");

            Ok(())
        })
        .unwrap();
}

proptest! {
    #[test]
    fn transform_round_trips_through_inverse(
        words in proptest::collection::vec("[abcdeğhıiklmnoöprsştuüyz]{1,10}", 1..8),
    ) {
        let text = words.join(" ");

        let mut tok = TokenizerOptions::default().build();
        tok.fit_vocab([text.as_str()]);
        let size = tok.vocab().len();

        let ids: Vec<u32> = tok.transform(&text).unwrap();
        prop_assert_eq!(tok.vocab().len(), size);
        prop_assert_eq!(tok.inverse_transform(&ids).unwrap(), tok.tokenize(&text));
    }
}
