//! Identifier generation for new products.

use crate::model::product::ProductId;
use uuid::Uuid;

/// Produces fresh, collision-free product ids.
pub trait IdService {
    fn random_id(&self) -> ProductId;
}

impl<T: IdService + ?Sized> IdService for &T {
    fn random_id(&self) -> ProductId {
        (**self).random_id()
    }
}

/// Production id source: random UUID v4 in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdService;

impl IdService for UuidIdService {
    fn random_id(&self) -> ProductId {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdService, UuidIdService};
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn uuid_ids_are_parseable_and_distinct() {
        let ids = UuidIdService;
        let generated: HashSet<_> = (0..64).map(|_| ids.random_id()).collect();
        assert_eq!(generated.len(), 64);
        for id in &generated {
            assert!(Uuid::parse_str(id).is_ok(), "not a uuid: {id}");
        }
    }
}
