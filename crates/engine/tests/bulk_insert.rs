// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use bulkrow_core::{InsertOptions, Model, ModelEvent, Value};
use bulkrow_engine::{BulkInsert, insert};
use bulkrow_testing::{Failure, Fixture};

fn names(fixture: &Fixture) -> Vec<String> {
	fixture
		.storage
		.inserted_rows()
		.iter()
		.map(|row| match row.get("name") {
			Some(Value::Utf8(name)) => name.clone(),
			other => panic!("unexpected name value {:?}", other),
		})
		.collect()
}

#[test]
fn test_empty_input_returns_true_without_side_effects() {
	let fixture = Fixture::new();
	let mut models = fixture.models(0);

	assert!(insert(&mut models).unwrap());
	assert!(fixture.storage.batches().is_empty());
	assert!(fixture.journal.events().is_empty());
}

#[test]
fn test_mixed_model_types_rejected_before_any_insert() {
	let fixture = Fixture::new();
	let mut models: Vec<Box<dyn Model>> = vec![
		Box::new(fixture.model("r1")),
		Box::new(fixture.model("r2").with_model_type("OtherModel")),
	];

	let err = insert(&mut models).unwrap_err();

	assert_eq!(err.code(), "BULK_001");
	assert!(fixture.storage.batches().is_empty());
}

#[test]
fn test_persisted_model_rejected_before_any_insert() {
	let fixture = Fixture::new();
	let mut models: Vec<Box<dyn Model>> = vec![
		Box::new(fixture.model("r1")),
		Box::new(fixture.model("r2").persisted()),
	];

	let err = insert(&mut models).unwrap_err();

	assert_eq!(err.code(), "BULK_002");
	assert!(fixture.storage.batches().is_empty());
}

#[test]
fn test_five_models_chunked_by_two_issue_three_inserts_in_order() {
	let fixture = Fixture::new();
	let mut models = fixture.models(5);

	assert!(BulkInsert::new().chunk_size(2).execute(&mut models).unwrap());

	assert_eq!(fixture.storage.batch_row_counts(), vec![2, 2, 1]);
	assert_eq!(names(&fixture), vec!["r1", "r2", "r3", "r4", "r5"]);
}

#[test]
fn test_pre_insert_events_fire_per_chunk_before_the_statement() {
	let fixture = Fixture::new();
	let mut models = fixture.models(2);

	assert!(BulkInsert::new().chunk_size(2).execute(&mut models).unwrap());

	assert_eq!(
		fixture.journal.events(),
		vec![
			"r1:saving",
			"r1:creating",
			"r2:saving",
			"r2:creating",
			"r1:created",
			"r1:finish_save",
			"r2:created",
			"r2:finish_save",
		]
	);
}

#[test]
fn test_saving_veto_in_second_chunk_keeps_first_chunk_committed() {
	let fixture = Fixture::new();
	let mut models: Vec<Box<dyn Model>> = vec![
		Box::new(fixture.model("r1")),
		Box::new(fixture.model("r2")),
		Box::new(fixture.model("r3").veto(ModelEvent::Saving)),
		Box::new(fixture.model("r4")),
		Box::new(fixture.model("r5")),
	];

	assert!(!BulkInsert::new().chunk_size(2).execute(&mut models).unwrap());

	// first chunk is committed and finalized, the rest is untouched
	assert_eq!(fixture.storage.batch_row_counts(), vec![2]);
	assert_eq!(names(&fixture), vec!["r1", "r2"]);
	assert!(models[..2].iter().all(|m| m.exists() && m.was_recently_created()));
	assert!(models[2..].iter().all(|m| !m.exists() && !m.was_recently_created()));

	let events = fixture.journal.events();
	assert!(events.contains(&"r3:saving".to_string()));
	assert!(!events.iter().any(|e| e.starts_with("r4:") || e.starts_with("r5:")));
}

#[test]
fn test_creating_veto_cancels_like_saving() {
	let fixture = Fixture::new();
	let mut models: Vec<Box<dyn Model>> = vec![
		Box::new(fixture.model("r1").veto(ModelEvent::Creating)),
		Box::new(fixture.model("r2")),
	];

	assert!(!insert(&mut models).unwrap());
	assert!(fixture.storage.batches().is_empty());
	assert_eq!(fixture.journal.events(), vec!["r1:saving", "r1:creating"]);
}

#[test]
fn test_full_success_finalizes_every_model() {
	let fixture = Fixture::new();
	let mut models: Vec<Box<dyn Model>> = vec![
		Box::new(fixture.model("r1").with_timestamps()),
		Box::new(fixture.model("r2")),
		Box::new(fixture.model("r3").with_timestamps()),
	];
	let options = InsertOptions::new().with("touch", false).with("source", "import");

	assert!(BulkInsert::new().options(options.clone()).execute(&mut models).unwrap());

	assert!(models.iter().all(|m| m.exists() && m.was_recently_created()));

	// timestamp columns only on models that opted into tracking
	let rows = fixture.storage.inserted_rows();
	assert!(rows[0].get("created_at").is_some());
	assert!(rows[0].get("updated_at").is_some());
	assert!(rows[1].get("created_at").is_none());
	assert!(rows[2].get("created_at").is_some());

	// finalize hook fired exactly once per model, with the exact options
	assert_eq!(fixture.journal.save_options(), vec![options.clone(), options.clone(), options]);
}

#[test]
fn test_reinserting_persisted_models_is_rejected() {
	let fixture = Fixture::new();
	let mut models = fixture.models(2);

	assert!(insert(&mut models).unwrap());
	let err = insert(&mut models).unwrap_err();

	assert_eq!(err.code(), "BULK_002");
	assert_eq!(fixture.storage.batch_row_counts(), vec![2]);
}

#[test]
fn test_storage_no_effect_surfaces_as_false_and_stops() {
	let fixture = Fixture::new();
	fixture.storage.fail_after(1, Failure::NoEffect);
	let mut models = fixture.models(4);

	assert!(!BulkInsert::new().chunk_size(2).execute(&mut models).unwrap());

	// the failing chunk was never committed, so its models stay new
	assert_eq!(fixture.storage.batch_row_counts(), vec![2]);
	assert!(models[..2].iter().all(|m| m.exists()));
	assert!(models[2..].iter().all(|m| !m.exists()));
}

#[test]
fn test_storage_error_propagates_and_keeps_prior_chunks() {
	let fixture = Fixture::new();
	fixture.storage.fail_after(1, Failure::Error);
	let mut models = fixture.models(3);

	let err = BulkInsert::new().chunk_size(2).execute(&mut models).unwrap_err();

	assert_eq!(err.code(), "STORE_001");
	assert_eq!(fixture.storage.batch_row_counts(), vec![2]);
	assert!(models[..2].iter().all(|m| m.exists()));
	assert!(!models[2].exists());
}

#[test]
fn test_zero_chunk_size_is_a_caller_error() {
	let fixture = Fixture::new();
	let mut models = fixture.models(1);

	let err = BulkInsert::new().chunk_size(0).execute(&mut models).unwrap_err();

	assert_eq!(err.code(), "BULK_003");
	assert!(fixture.storage.batches().is_empty());
	assert!(fixture.journal.events().is_empty());
}
