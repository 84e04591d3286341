use std::{cell::RefCell, collections::HashMap};

use tcs_catalog::{
    simbad::{NameResolver, ResolvedTarget},
    tcs_errors::TcsCatError,
};

/// In-memory stand-in for SIMBAD, keeping track of every query.
pub struct MockResolver {
    known: HashMap<String, ResolvedTarget>,
    pub queries: RefCell<Vec<String>>,
}

impl MockResolver {
    pub fn new() -> Self {
        let mut known = HashMap::new();
        known.insert(
            "alf Sco".to_string(),
            ResolvedTarget {
                ra: "16 29 24.45970".into(),
                dec: "-26 25 55.2094".into(),
                pm_ra: -12.11,
                pm_dec: -23.30,
            },
        );
        known.insert(
            "HD 214810A".to_string(),
            ResolvedTarget {
                ra: "22 40 11.8672".into(),
                dec: "-47 13 56.233".into(),
                pm_ra: 150.0,
                pm_dec: 0.0,
            },
        );
        known.insert(
            "HD 218434".to_string(),
            ResolvedTarget {
                ra: "23 07 28.7157".into(),
                dec: "+18 38 42.045".into(),
                pm_ra: 9.59,
                pm_dec: -23.06,
            },
        );
        MockResolver {
            known,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl NameResolver for MockResolver {
    fn resolve(&self, name: &str) -> Result<ResolvedTarget, TcsCatError> {
        self.queries.borrow_mut().push(name.to_string());
        self.known
            .get(name)
            .cloned()
            .ok_or_else(|| TcsCatError::NameNotFound(name.to_string()))
    }
}
