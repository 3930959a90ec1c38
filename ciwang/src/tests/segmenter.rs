use crate::errors::CiwangError;
use crate::nature::Nature;
use crate::segmenter::Segmenter;
use crate::test_utils::{lexicon, LongestMatch, NoPath};

fn segment(segmenter: &Segmenter, text: &str) -> Vec<String> {
    let mut worker = segmenter.new_worker();
    worker.reset_sentence(text);
    worker.segment().unwrap();
    worker.term_iter().map(|t| t.to_string()).collect()
}

/// 数詞と月が時間詞にまとめられることのテスト
#[test]
fn test_date_is_fused() {
    let segmenter = Segmenter::new(lexicon!["月" => Nature::Q, "出生" => Nature::V], LongestMatch);
    assert_eq!(segment(&segmenter, "11月出生"), vec!["11月/t", "出生/v"]);
}

/// 年として妥当でない数詞が `年` と結合しないことのテスト
#[test]
fn test_implausible_year() {
    let segmenter = Segmenter::new(lexicon!["年" => Nature::Q], LongestMatch);
    assert_eq!(segment(&segmenter, "2014年"), vec!["2014年/t"]);
    assert_eq!(segment(&segmenter, "35年"), vec!["35/m", "年/q"]);
}

/// 語の末尾が数字列の途中にかかっても分詞できることのテスト
#[test]
fn test_hit_ending_inside_digit_run() {
    let segmenter = Segmenter::new(lexicon!["10" => Nature::M, "元" => Nature::Q], LongestMatch);
    assert_eq!(segment(&segmenter, "100元"), vec!["100/m", "元/q"]);

    let segmenter = Segmenter::new(lexicon!["ab" => Nature::Nx], LongestMatch);
    assert_eq!(segment(&segmenter, "abc"), vec!["ab/nx", "c/nx"]);
}

/// `〇`を含む漢数字の年が時間詞にまとめられることのテスト
#[test]
fn test_year_with_circle_zero() {
    let segmenter = Segmenter::new(lexicon!["年" => Nature::Q], LongestMatch);
    assert_eq!(segment(&segmenter, "二〇一四年"), vec!["二〇一四年/t"]);
}

/// 音訳人名の辞書による認識と、認識の無効化のテスト
#[test]
fn test_translated_name() {
    let segmenter = Segmenter::new(lexicon!["说" => Nature::V], LongestMatch)
        .translated_name_dictionary(lexicon!["布" => Nature::Nrf, "什" => Nature::Nrf]);
    assert_eq!(segment(&segmenter, "布什说"), vec!["布什/nrf", "说/v"]);

    let segmenter = segmenter.translated_name_recognize(false);
    assert_eq!(segment(&segmenter, "布什说"), vec!["布/n", "什/n", "说/v"]);
}

/// 索引モードで長い語の部分語が出力されることのテスト
#[test]
fn test_index_mode() {
    let core = lexicon![
        "中华" => Nature::Nz,
        "中华人民共和国" => Nature::Ns,
        "人民" => Nature::N,
        "共和国" => Nature::N,
        "成立" => Nature::V,
    ];
    let segmenter = Segmenter::new(core, LongestMatch).index_mode(true);
    let mut worker = segmenter.new_worker();
    worker.reset_sentence("中华人民共和国成立");
    worker.segment().unwrap();
    let terms: Vec<_> = worker
        .term_iter()
        .map(|t| (t.word().to_string(), t.offset()))
        .collect();
    assert_eq!(
        terms,
        vec![
            ("中华人民共和国".to_string(), 0),
            ("中华".to_string(), 0),
            ("人民".to_string(), 2),
            ("共和国".to_string(), 4),
            ("成立".to_string(), 7),
        ]
    );

    let segmenter = segmenter.index_mode(false);
    assert_eq!(
        segment(&segmenter, "中华人民共和国成立"),
        vec!["中华人民共和国/ns", "成立/v"]
    );
}

/// ユーザー辞書の語が分詞結果に現れることのテスト
#[test]
fn test_custom_dictionary() {
    let segmenter = Segmenter::new(lexicon!["南京" => Nature::Ns, "市长" => Nature::N], LongestMatch)
        .custom_dictionary(lexicon!["南京市" => Nature::Ns]);
    assert_eq!(segment(&segmenter, "南京市长"), vec!["南京/ns", "市长/n"]);

    let segmenter = segmenter.use_custom_dictionary(true).unwrap();
    assert_eq!(segment(&segmenter, "南京市长"), vec!["南京市/ns", "长/n"]);
}

/// 空の文ではデコーダを呼ばずに語がないことのテスト
#[test]
fn test_empty_sentence() {
    let segmenter = Segmenter::new(lexicon!["南京" => Nature::Ns], NoPath);
    let mut worker = segmenter.new_worker();
    worker.reset_sentence("");
    worker.segment().unwrap();
    assert_eq!(worker.num_terms(), 0);
}

/// デコーダがパスを返さない場合のエラーのテスト
#[test]
fn test_decoder_without_path() {
    let segmenter = Segmenter::new(lexicon!["南京" => Nature::Ns], NoPath);
    let mut worker = segmenter.new_worker();
    worker.reset_sentence("南京");
    assert!(matches!(worker.segment(), Err(CiwangError::InvalidState(_))));
}

/// ワーカーを再利用しても前の文の結果が残らないことのテスト
#[test]
fn test_worker_reuse() {
    let segmenter = Segmenter::new(lexicon!["北京" => Nature::Ns, "上海" => Nature::Ns], LongestMatch);
    let mut worker = segmenter.new_worker();

    worker.reset_sentence("北京和上海");
    worker.segment().unwrap();
    assert_eq!(worker.num_terms(), 3);
    assert_eq!(worker.term(2).range_char(), 3..5);

    worker.reset_sentence("上海");
    worker.segment().unwrap();
    assert_eq!(worker.num_terms(), 1);
    assert_eq!(worker.terms()[0].word(), "上海");
    assert_eq!(worker.full_lattice().len_char(), 2);
}
