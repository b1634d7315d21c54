//! Formal verification with the Kani model checker.

#[cfg(kani)]
mod proofs {
    use crate::{Coord, GridSize};

    /// Proves the index ↔ coordinate bijection for every supported size.
    #[kani::proof]
    fn verify_coord_round_trip() {
        let s: usize = kani::any();
        kani::assume(s >= GridSize::MIN && s <= GridSize::MAX);
        let Ok(size) = GridSize::new(s) else {
            return;
        };

        let index: usize = kani::any();
        kani::assume(index < size.cell_count());

        let coord = Coord::from_index(index, size);
        assert!(coord.is_some());
        if let Some(coord) = coord {
            assert!(coord.x < s && coord.y < s && coord.z < s);
            assert_eq!(coord.to_index(size), Some(index));
        }
    }
}
