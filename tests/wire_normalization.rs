use catalog_core::document::{
    normalize_document, normalize_page, DocumentId, NormalizeError, RecordError,
};
use serde_json::json;

#[test]
fn backend_field_names_map_to_canonical_record() {
    let record = normalize_document(json!({
        "id": 7,
        "titulo": "Los Juegos del Hambre",
        "autor": "Suzanne Collins",
        "anio": 2008,
        "categoria": "novela",
        "editorial": "Molino",
        "resumen": "Distopía",
        "tipo": "libro",
        "tipo_medio": "fisico",
        "existencias": 4,
        "edicion": "978-84-272-0",
        "link": "http://covers/7.jpg"
    }))
    .unwrap();

    assert_eq!(record.id, DocumentId::new(7));
    assert_eq!(record.title, "Los Juegos del Hambre");
    assert_eq!(record.author, "Suzanne Collins");
    assert_eq!(record.year, Some(2008));
    assert_eq!(record.category.as_deref(), Some("novela"));
    assert_eq!(record.publisher.as_deref(), Some("Molino"));
    assert_eq!(record.summary.as_deref(), Some("Distopía"));
    assert_eq!(record.media_type.as_deref(), Some("fisico"));
    assert_eq!(record.copies_available, Some(4));
    assert_eq!(record.kind.as_deref(), Some("libro"));
    assert_eq!(record.edition.as_deref(), Some("978-84-272-0"));
}

#[test]
fn english_aliases_are_accepted() {
    let record = normalize_document(json!({
        "id": 1,
        "title": "Zeta",
        "author": "X",
        "year": 2000,
        "category": "Novela",
        "copies": 0,
        "mediaType": "digital"
    }))
    .unwrap();

    assert_eq!(record.year, Some(2000));
    assert_eq!(record.copies_available, Some(0));
    assert_eq!(record.media_type.as_deref(), Some("digital"));
}

#[test]
fn null_absent_and_empty_optionals_are_unknown() {
    let record = normalize_document(json!({
        "id": 3,
        "titulo": "Sin datos",
        "autor": null,
        "anio": null,
        "categoria": "",
        "existencias": null
    }))
    .unwrap();

    assert_eq!(record.author, "");
    assert_eq!(record.year, None, "absent year must not become 0");
    assert_eq!(record.category, None);
    assert_eq!(record.publisher, None);
    assert_eq!(record.copies_available, None);
}

#[test]
fn numeric_strings_are_read_and_junk_is_dropped() {
    let record = normalize_document(json!({
        "id": 4,
        "titulo": "Texto",
        "anio": "1999",
        "existencias": "muchas"
    }))
    .unwrap();

    assert_eq!(record.year, Some(1999));
    assert_eq!(record.copies_available, None);
}

#[test]
fn missing_id_or_blank_title_is_rejected() {
    let no_id = normalize_document(json!({ "titulo": "Huérfano" }));
    assert!(matches!(no_id, Err(NormalizeError::Record(RecordError::MissingId))));

    let blank = normalize_document(json!({ "id": 9, "titulo": "   " }));
    assert!(matches!(
        blank,
        Err(NormalizeError::Record(RecordError::BlankTitle(id))) if id == DocumentId::new(9)
    ));
}

#[test]
fn page_skips_invalid_items_and_duplicate_ids() {
    let page = normalize_page(
        json!({
            "items": [
                { "id": 1, "titulo": "Primero" },
                { "id": 2 },
                "not a document",
                { "id": 1, "titulo": "Repetido" },
                { "id": 3, "titulo": "Tercero" }
            ],
            "page": 2,
            "size": 10
        }),
        1,
        100,
    );

    let titles: Vec<&str> = page.items.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Primero", "Tercero"]);
    assert_eq!(page.page, 2);
    assert_eq!(page.size, 10);
}

#[test]
fn page_without_items_array_is_empty() {
    let missing = normalize_page(json!({ "detail": "oops" }), 1, 100);
    assert!(missing.items.is_empty());
    assert_eq!((missing.page, missing.size), (1, 100));

    let wrong_type = normalize_page(json!({ "items": { "id": 1 } }), 1, 50);
    assert!(wrong_type.items.is_empty());

    let not_object = normalize_page(json!([{ "id": 1, "titulo": "x" }]), 1, 50);
    assert!(not_object.items.is_empty());
}

#[test]
fn both_spellings_present_keeps_record_and_prefers_spanish() {
    let record = normalize_document(json!({
        "id": 1,
        "titulo": "Rayuela",
        "title": "Hopscotch",
        "anio": 1963,
        "year": 1966,
        "edicion": "1a",
        "isbn": "978"
    }))
    .unwrap();

    assert_eq!(record.title, "Rayuela");
    assert_eq!(record.year, Some(1963));
    assert_eq!(record.edition.as_deref(), Some("1a"));

    let page = normalize_page(
        json!({ "items": [{ "id": 1, "titulo": "Rayuela", "anio": 1963, "year": 1963 }] }),
        1,
        100,
    );
    assert_eq!(page.items.len(), 1);
}

#[test]
fn null_spanish_field_falls_back_to_english_spelling() {
    let record = normalize_document(json!({
        "id": 2,
        "titulo": "Ficciones",
        "anio": null,
        "year": 1944,
        "existencias": null,
        "copiesAvailable": 2
    }))
    .unwrap();

    assert_eq!(record.year, Some(1944));
    assert_eq!(record.copies_available, Some(2));
}

#[test]
fn numeric_isbn_and_edition_are_stringified() {
    let isbn = normalize_document(json!({
        "id": 5,
        "titulo": "Cien años de soledad",
        "isbn": 9788437604947_i64
    }))
    .unwrap();
    assert_eq!(isbn.edition.as_deref(), Some("9788437604947"));

    let edition = normalize_document(json!({ "id": 6, "titulo": "Aura", "edicion": 2 })).unwrap();
    assert_eq!(edition.edition.as_deref(), Some("2"));
}

#[test]
fn explicit_year_zero_is_kept() {
    let record = normalize_document(json!({ "id": 8, "titulo": "Anónimo", "anio": 0 })).unwrap();
    assert_eq!(record.year, Some(0));
}
