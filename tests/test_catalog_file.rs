use tcs_catalog::{
    catalog::{
        assembler::{CatalogAssembler, UnresolvedPolicy},
        writer::{parse, serialize},
        Catalog,
    },
    constants::CATALOG_COLUMNS,
    setup::SetupInput,
};

mod common;
use common::MockResolver;

fn assembled() -> Catalog {
    let resolver = MockResolver::new();
    let setup = SetupInput {
        rotang: "5,10,-15".into(),
        rot_mode: "GRV,EQU,GRV".into(),
        epoch: "2024.5".into(),
        ..SetupInput::default()
    };
    CatalogAssembler::new(&resolver)
        .from_names(
            "alf Sco, HD 214810A, HD 218434",
            &setup,
            UnresolvedPolicy::Abort,
        )
        .unwrap()
        .catalog
}

#[test]
fn test_serialized_layout() {
    let text = serialize(&assembled()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].split('\t').collect::<Vec<_>>(), CATALOG_COLUMNS);
    for (idx, line) in lines[1..].iter().enumerate() {
        let cells: Vec<&str> = line.split('\t').collect();
        assert_eq!(cells.len(), CATALOG_COLUMNS.len());
        assert_eq!(cells[0], (idx + 1).to_string());
    }
    assert!(lines[3].starts_with("3\tHD218434\t23:07:28.7157\t+18:38:42.045\t2000\t"));
    assert!(lines[3].ends_with("\t-15\tGRV\t00:00:00\t00:00:00\t2000\t00:00:00\t00:00:00\t2000\t2024.5"));
}

#[test]
fn test_round_trip() {
    let catalog = assembled();
    let parsed = parse(&serialize(&catalog).unwrap()).unwrap();

    assert_eq!(parsed.len(), catalog.len());
    assert_eq!(parsed.records(), catalog.records());
    assert_eq!(
        Catalog::from_tsv(&parsed.to_tsv().unwrap()).unwrap(),
        parsed
    );
}
