//! 詞網（ワードネット）の実装モジュール。
//!
//! 詞網は文中の位置ごとに候補語の頂点を保持します。行 `r`（1 ≤ r ≤ 文字数）には
//! 0始まりの文字位置 `r-1` から始まる頂点が入り、行0には文頭、行 `文字数+1` には
//! 文末の番兵が入ります。
use crate::atom::AtomToken;
use crate::segmenter::vertex::Vertex;

/// 接続を補修するときに遡る行数
const MAX_BACKTRACK_ROWS: usize = 4;

/// 詞網
///
/// 各行には同じ文字数の頂点が高々1つしか入りません。
#[derive(Default, Clone)]
pub struct Lattice {
    rows: Vec<Vec<Vertex>>,
    len_char: usize,
}

impl Lattice {
    /// `len_char` 文字の文のための詞網を作成します。
    pub fn new(len_char: usize) -> Self {
        let mut lattice = Self::default();
        lattice.reset(len_char);
        lattice
    }

    /// 詞網をリセットし、新しい文の処理を準備します。
    ///
    /// # 引数
    ///
    /// * `len_char` - 新しい文の文字数
    pub fn reset(&mut self, len_char: usize) {
        let new_len = len_char + 2;
        for v in self.rows.iter_mut() {
            v.clear();
        }
        if self.rows.len() < new_len {
            self.rows.resize_with(new_len, || Vec::with_capacity(4));
        }
        self.rows.truncate(new_len);
        self.len_char = len_char;
        self.rows[0].push(Vertex::begin());
        self.rows[len_char + 1].push(Vertex::end());
    }

    /// 設定された文の文字数を返します。
    #[inline(always)]
    pub const fn len_char(&self) -> usize {
        self.len_char
    }

    /// 行数（文字数+2）を返します。
    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// 指定された行の頂点を返します。範囲外の行は空です。
    #[inline(always)]
    pub fn row(&self, row: usize) -> &[Vertex] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or_default()
    }

    /// 文頭の番兵を返します。
    ///
    /// # パニック
    ///
    /// [`Self::reset()`]か[`Self::new()`]で一度も初期化されていない場合、パニックします。
    #[inline(always)]
    pub fn begin(&self) -> &Vertex {
        &self.rows[0][0]
    }

    /// 文末の番兵を返します。
    ///
    /// # パニック
    ///
    /// [`Self::reset()`]か[`Self::new()`]で一度も初期化されていない場合、パニックします。
    #[inline(always)]
    pub fn end(&self) -> &Vertex {
        &self.rows[self.len_char + 1][0]
    }

    /// 番兵を含む頂点の総数を返します。
    pub fn num_vertices(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// 頂点を行に追加します。
    ///
    /// # 戻り値
    ///
    /// 追加した場合は`true`。同じ文字数の頂点がすでにある場合や、頂点が文頭の
    /// 番兵の行に置かれるか文末を越える場合は何もせず`false`
    pub fn add(&mut self, row: usize, vertex: Vertex) -> bool {
        if row == 0 || row + vertex.len_char() > self.len_char + 1 {
            return false;
        }
        let Some(line) = self.rows.get_mut(row) else {
            return false;
        };
        if line.iter().any(|v| v.len_char() == vertex.len_char()) {
            return false;
        }
        line.push(vertex);
        true
    }

    /// 連続する原子を `row` から順に追加します。
    pub fn add_atoms<'a, I>(&mut self, row: usize, atoms: I)
    where
        I: IntoIterator<Item = AtomToken<'a>>,
    {
        let mut offset = 0;
        for atom in atoms {
            let len = atom.len_char();
            self.add(row + offset, Vertex::from_atom(&atom));
            offset += len;
        }
    }

    /// パスの頂点を、先頭からの文字位置に対応する行へ追加します。
    ///
    /// 番兵は詞網がすでに持っているため追加しません。
    pub fn add_path(&mut self, path: &[Vertex]) {
        let mut row = 1;
        for vertex in path.iter().filter(|v| !v.is_sentinel()) {
            let len = vertex.len_char();
            self.add(row, vertex.clone());
            row += len;
        }
    }

    /// 合成された頂点を挿入し、前後の接続を全詞網から補修します。
    ///
    /// 直前の数行については、挿入位置でちょうど終わる全詞網の頂点を追加します。
    /// 直後の行が空であれば、全詞網の同じ行で埋めます。
    ///
    /// # 引数
    ///
    /// * `row` - 挿入する行
    /// * `vertex` - 挿入する頂点
    /// * `full` - 同じ文の全詞網
    ///
    /// # 戻り値
    ///
    /// 挿入した場合は`true`。同じ文字数の頂点がすでにある場合は`false`
    pub fn insert(&mut self, row: usize, vertex: Vertex, full: &Lattice) -> bool {
        let next_row = row + vertex.len_char();
        if !self.add(row, vertex) {
            return false;
        }

        let lowest = row.saturating_sub(MAX_BACKTRACK_ROWS).max(1);
        for l in (lowest..row).rev() {
            for pre in full.row(l) {
                if pre.len_char() == row - l {
                    self.add(l, pre.clone());
                }
            }
        }

        if self.row(next_row).is_empty() && !full.row(next_row).is_empty() {
            self.rows[next_row] = full.rows[next_row].clone();
        }
        true
    }
}

impl std::fmt::Debug for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Lattice {{ len_char: {}, rows: [", self.len_char)?;
        for (i, r) in self.rows.iter().enumerate() {
            let vertices: Vec<String> = r.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{i} => [{}]", vertices.join(", "))?;
        }
        writeln!(f, "]}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::atomize;

    #[test]
    fn test_reset_places_sentinels() {
        let mut lattice = Lattice::new(3);
        assert_eq!(lattice.num_rows(), 5);
        assert!(lattice.begin().is_sentinel());
        assert!(lattice.end().is_sentinel());
        lattice.reset(1);
        assert_eq!(lattice.num_rows(), 3);
        assert_eq!(lattice.num_vertices(), 2);
    }

    #[test]
    fn test_add_keeps_one_vertex_per_length() {
        let mut lattice = Lattice::new(2);
        assert!(lattice.add(1, Vertex::new("中国", None)));
        assert!(!lattice.add(1, Vertex::new("中华", None)));
        assert!(lattice.add(1, Vertex::new("中", None)));
        assert_eq!(lattice.row(1).len(), 2);
        assert_eq!(lattice.row(1)[0].surface(), "中国");
    }

    #[test]
    fn test_add_out_of_range() {
        let mut lattice = Lattice::new(2);
        assert!(!lattice.add(0, Vertex::new("中", None)));
        assert!(!lattice.add(2, Vertex::new("中国", None)));
        assert!(!lattice.add(5, Vertex::new("中", None)));
        assert_eq!(lattice.num_vertices(), 2);

        let mut lattice = Lattice::default();
        assert!(!lattice.add(1, Vertex::new("中", None)));
        assert!(!lattice.insert(1, Vertex::new("中", None), &Lattice::new(1)));
        assert_eq!(lattice.num_vertices(), 0);
    }

    #[test]
    fn test_add_atoms() {
        let chars: Vec<char> = "ab西12".chars().collect();
        let mut lattice = Lattice::new(chars.len());
        lattice.add_atoms(1, atomize(&chars, 0, chars.len()).unwrap());
        assert_eq!(lattice.row(1)[0].surface(), "ab");
        assert!(lattice.row(2).is_empty());
        assert_eq!(lattice.row(3)[0].surface(), "西");
        assert_eq!(lattice.row(4)[0].surface(), "12");
    }

    #[test]
    fn test_add_path() {
        let mut lattice = Lattice::new(3);
        let path = vec![
            Vertex::begin(),
            Vertex::new("中国", None),
            Vertex::new("人", None),
            Vertex::end(),
        ];
        lattice.add_path(&path);
        assert_eq!(lattice.row(1)[0].surface(), "中国");
        assert_eq!(lattice.row(3)[0].surface(), "人");
        assert_eq!(lattice.num_vertices(), 4);
    }

    #[test]
    fn test_insert_repairs_connectivity() {
        // 全詞網: 在 / 维 / 多 / 利 / 亚 / 说 と 在维
        let mut full = Lattice::new(6);
        for (row, w) in ["在", "维", "多", "利", "亚", "说"].iter().enumerate() {
            full.add(row + 1, Vertex::new(*w, None));
        }
        full.add(1, Vertex::new("在维", None));

        let mut optimum = Lattice::new(6);
        optimum.add(1, Vertex::new("在维", None));
        optimum.add(3, Vertex::new("多", None));

        assert!(optimum.insert(2, Vertex::translated_person("维多利亚", 1000), &full));
        assert_eq!(optimum.row(2)[0].surface(), "维多利亚");
        // 行1に長さ1の「在」が補われ、行6は全詞網からコピーされる
        assert!(optimum.row(1).iter().any(|v| v.surface() == "在"));
        assert_eq!(optimum.row(6)[0].surface(), "说");

        assert!(!optimum.insert(2, Vertex::translated_person("维多利亚", 1000), &full));
    }
}
