#[cfg(test)]
mod _tests_vertex_store {
    use super::super::vertex_store::VertexStore;
    use crate::error::TilingError;

    #[test]
    fn test_append_assigns_increasing_indices() {
        let mut store = VertexStore::new(3);
        assert!(store.is_empty());
        assert_eq!(store.append(&[0, 0, 0]).unwrap(), 0);
        assert_eq!(store.append(&[1, -1, 2]).unwrap(), 1);
        assert_eq!(store.append(&[5, 5, 5]).unwrap(), 2);

        assert_eq!(store.len(), 3);
        assert_eq!(store.element_count(), 9);
        assert_eq!(store.element_count() % store.dimension(), 0);
        assert_eq!(store.get(1).unwrap(), &[1, -1, 2]);
    }

    #[test]
    fn test_append_rejects_wrong_length() {
        let mut store = VertexStore::new(4);
        assert!(matches!(
            store.append(&[1, 2]),
            Err(TilingError::CoordinateLength { expected: 4, actual: 2 })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let mut store = VertexStore::with_capacity(2, 8);
        store.append(&[3, 4]).unwrap();
        assert!(matches!(
            store.get(1),
            Err(TilingError::IndexOutOfRange { index: 1, count: 1 })
        ));
    }

    #[test]
    fn test_iter_matches_get() {
        let mut store = VertexStore::new(2);
        for i in 0..5 {
            store.append(&[i, -i]).unwrap();
        }
        for (index, point) in store.iter().enumerate() {
            assert_eq!(point, store.get(index).unwrap());
        }
        assert_eq!(store.as_flat()[..4], [0, 0, 1, -1]);
    }
}
