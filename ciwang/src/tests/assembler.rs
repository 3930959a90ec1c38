use crate::dictionary::{Attribute, Lexicon};
use crate::nature::Nature;
use crate::segmenter::lattice::Lattice;
use crate::segmenter::Segmenter;
use crate::sentence::Sentence;
use crate::test_utils::{lexicon, LongestMatch};
use crate::Decoder;

const SENTENCES: [&str; 7] = [
    "去北京买iPhone12",
    "中国人民3.14倍",
    "abc，你好！",
    "商品和服务",
    "第Ⅲ章②节",
    "100元",
    "abc",
];

fn core() -> Lexicon {
    lexicon![
        "北京" => Nature::Ns,
        "中国" => Nature::Ns,
        "中国人" => Nature::N,
        "人民" => Nature::N,
        "商品" => Nature::N,
        "和服" => Nature::N,
        "服务" => Nature::V,
        "你好" => Nature::V,
        "10" => Nature::M,
        "元" => Nature::Q,
        "ab" => Nature::Nx,
    ]
}

fn assemble(segmenter: &Segmenter, text: &str) -> Lattice {
    let mut sent = Sentence::new();
    sent.set_sentence(text);
    let mut lattice = Lattice::default();
    segmenter.build_lattice(&sent, &mut lattice).unwrap();
    lattice
}

/// 全詞網のどの頂点の直後にも、続く頂点か文末があることのテスト
#[test]
fn test_every_vertex_is_connected() {
    let segmenter = Segmenter::new(core(), LongestMatch);
    for text in SENTENCES {
        let lattice = assemble(&segmenter, text);
        let end_row = lattice.len_char() + 1;
        assert!(!lattice.row(1).is_empty(), "{text}: {lattice:?}");
        for row in 1..end_row {
            for v in lattice.row(row) {
                let next = row + v.len_char();
                assert!(next <= end_row, "{text}: {v} overflows");
                assert!(!lattice.row(next).is_empty(), "{text}: {v} is a dead end");
            }
        }
    }
}

/// デコードしたパスが文全体を重複なく覆うことのテスト
#[test]
fn test_decoded_path_tiles_sentence() {
    let segmenter = Segmenter::new(core(), LongestMatch);
    for text in SENTENCES {
        let lattice = assemble(&segmenter, text);
        let paths = LongestMatch.decode(&lattice);
        assert_eq!(paths.len(), 1);
        let path = &paths[0];
        assert!(path.first().unwrap().is_sentinel());
        assert!(path.last().unwrap().is_sentinel());
        let joined: String = path.iter().map(|v| v.surface()).collect();
        assert_eq!(joined, text);
    }
}

/// ユーザー辞書の語が既存の頂点を置き換えずに加わることのテスト
#[test]
fn test_custom_hits_do_not_replace_core_hits() {
    let custom = Lexicon::from_records([
        ("北京", Attribute::new(Nature::Nz, 7)),
        ("买iPhone", Attribute::new(Nature::V, 7)),
    ])
    .unwrap();
    let plain = Segmenter::new(core(), LongestMatch);
    let with_custom = Segmenter::new(core(), LongestMatch)
        .custom_dictionary(custom)
        .use_custom_dictionary(true)
        .unwrap();

    let before = assemble(&plain, SENTENCES[0]);
    let after = assemble(&with_custom, SENTENCES[0]);
    assert_eq!(after.num_vertices(), before.num_vertices() + 1);
    assert_eq!(after.row(2), before.row(2));
    assert_eq!(after.row(4).len(), 2);
    assert_eq!(after.row(4)[1].surface(), "买iPhone");
}

/// 無効化したユーザー辞書が使われないことのテスト
#[test]
fn test_disabled_custom_dictionary() {
    let custom = lexicon!["买iPhone" => Nature::V];
    let segmenter = Segmenter::new(core(), LongestMatch)
        .custom_dictionary(custom)
        .use_custom_dictionary(false)
        .unwrap();
    let lattice = assemble(&segmenter, SENTENCES[0]);
    assert_eq!(lattice.row(4).len(), 1);
}
