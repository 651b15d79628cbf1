use lazy_static::lazy_static;
use std::collections::BTreeMap;

use crate::ring::Matrix;

lazy_static! {
    /// Named sample grids for mod-4 Alien Tiles.
    ///
    /// * `corner-3x3`: smallest total 9, out of 16 clearing toggle matrices.
    /// * `demo-3x3`: smallest total 6.
    /// * `single-tile`: the lone tile needs 3 toggles.
    /// * `even-4x4`: both sides even, so exactly one toggle matrix (total 26) clears it.
    /// * `odd-strip`: inconsistent already mod 2.
    /// * `no-lift`: solvable mod 2 but not mod 4.
    pub static ref PUZZLES: BTreeMap<&'static str, Matrix> = {
        let mut map = BTreeMap::new();
        map.insert("corner-3x3", vec![vec![2, 2, 1], vec![0, 2, 3], vec![3, 3, 3]]);
        map.insert("demo-3x3", vec![vec![1, 3, 2], vec![3, 3, 2], vec![0, 2, 2]]);
        map.insert("single-tile", vec![vec![1]]);
        map.insert(
            "even-4x4",
            vec![
                vec![1, 0, 3, 2],
                vec![2, 2, 0, 1],
                vec![0, 3, 1, 1],
                vec![3, 1, 2, 0],
            ],
        );
        map.insert("odd-strip", vec![vec![1, 2, 3, 0]]);
        map.insert("no-lift", vec![vec![3, 1]]);
        map
    };
}

/// Looks up a preset grid by name.
pub fn puzzle(name: &str) -> Option<&'static Matrix> {
    PUZZLES.get(name)
}
