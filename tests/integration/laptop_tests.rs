//! Laptop store tests

use laptop_fleet::{
    models::{
        enums::LaptopStatus,
        laptop::{ReportProblem, ResolveProblem},
    },
    AppError,
};
use uuid::Uuid;

use crate::{empty_services, laptop_form};

fn report(description: &str, name: &str, email: &str) -> ReportProblem {
    ReportProblem {
        description: description.to_string(),
        reporter_name: name.to_string(),
        reporter_email: email.to_string(),
    }
}

#[test]
fn test_create_laptop_defaults() {
    let mut services = empty_services();
    let laptop = services.laptops.create(&laptop_form());

    assert_eq!(laptop.computer_name, "X");
    assert_eq!(laptop.ram, "8GB");
    assert_eq!(laptop.status, LaptopStatus::InUse);
    assert!(laptop.remarks.is_empty());
    assert!(laptop.problems.is_empty());
    assert!(!laptop.id.is_nil());

    let other = services.laptops.create(&laptop_form());
    assert_ne!(laptop.id, other.id);
    assert_eq!(services.laptops.count(), 2);
}

#[test]
fn test_update_with_unchanged_record_reports_no_change() {
    let mut services = empty_services();
    let laptop = services.laptops.create(&laptop_form());

    let err = services.laptops.update(laptop.clone()).unwrap_err();
    assert_eq!(err, AppError::Validation("No change was made.".to_string()));
    assert_eq!(services.laptops.get_by_id(laptop.id).unwrap(), &laptop);
}

#[test]
fn test_update_with_same_status_is_refused_even_if_other_fields_change() {
    let mut services = empty_services();
    let laptop = services.laptops.create(&laptop_form());

    let mut edited = laptop.clone();
    edited.cpu = "new".to_string();
    let err = services.laptops.update(edited).unwrap_err();
    assert_eq!(err.reason(), "No change was made.");
    assert_eq!(services.laptops.get_by_id(laptop.id).unwrap(), &laptop);
}

#[test]
fn test_create_laptop_stores_trimmed_fields() {
    let mut services = empty_services();
    let mut form = laptop_form();
    form.computer_name = "  X  ".to_string();
    form.gpu = " Z\t".to_string();
    assert!(form.check().is_ok());

    let laptop = services.laptops.create(&form);
    assert_eq!(laptop.computer_name, "X");
    assert_eq!(laptop.gpu, "Z");
    assert_eq!(services.laptops.get_by_id(laptop.id).unwrap().computer_name, "X");
}

#[test]
fn test_update_replaces_record_in_place() {
    let mut services = empty_services();
    let first = services.laptops.create(&laptop_form());
    let second = services.laptops.create(&laptop_form());

    let mut edited = first.clone();
    edited.status = LaptopStatus::Faulty;
    edited.software_version = "Windows 11".to_string();
    services.laptops.update(edited).unwrap();

    let laptops = services.laptops.list();
    assert_eq!(laptops[0].id, first.id);
    assert_eq!(laptops[0].status, LaptopStatus::Faulty);
    assert_eq!(laptops[1].id, second.id);
}

#[test]
fn test_update_unknown_laptop_is_ignored() {
    let mut services = empty_services();
    let mut stray = services.laptops.create(&laptop_form());
    services.laptops.delete(stray.id);

    stray.status = LaptopStatus::Reserved;
    assert!(services.laptops.update(stray).is_ok());
    assert_eq!(services.laptops.count(), 0);
}

#[test]
fn test_change_status_allows_any_transition_but_no_noop() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;

    for status in [LaptopStatus::Faulty, LaptopStatus::Available, LaptopStatus::Checking] {
        services.laptops.change_status(id, status).unwrap();
        assert_eq!(services.laptops.get_by_id(id).unwrap().status, status);
    }

    let err = services
        .laptops
        .change_status(id, LaptopStatus::Checking)
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = services
        .laptops
        .change_status(Uuid::new_v4(), LaptopStatus::Faulty)
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_delete_is_idempotent() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;
    services.laptops.delete(id);
    services.laptops.delete(id);
    assert!(services.laptops.get_by_id(id).is_err());
}

#[test]
fn test_add_remark_rejects_blank_text() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;

    for text in ["", "   "] {
        let err = services.laptops.add_remark(id, text).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    assert!(services.laptops.get_by_id(id).unwrap().remarks.is_empty());
}

#[test]
fn test_add_remark_appends_in_order() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;

    services.laptops.add_remark(id, "first").unwrap();
    services.laptops.add_remark(id, "second").unwrap();
    services.laptops.add_remark(id, "ok").unwrap();

    let remarks = &services.laptops.get_by_id(id).unwrap().remarks;
    assert_eq!(remarks, &vec!["first", "second", "ok"]);
}

#[test]
fn test_report_problem_checks_description_first() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;

    let err = services.laptops.report_problem(id, &report("", "", "abc")).unwrap_err();
    assert!(err.reason().contains("description"));

    let err = services.laptops.report_problem(id, &report("Hinge", " ", "abc")).unwrap_err();
    assert!(err.reason().contains("name"));

    let err = services.laptops.report_problem(id, &report("Hinge", "Sam", "")).unwrap_err();
    assert!(err.reason().contains("email"));

    for email in ["abc", "a@b", "@b.c"] {
        let err = services
            .laptops
            .report_problem(id, &report("Hinge", "Sam", email))
            .unwrap_err();
        assert!(err.reason().contains("valid email"));
    }

    assert!(services.laptops.get_by_id(id).unwrap().problems.is_empty());
}

#[test]
fn test_report_problem_rejects_padded_email() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;

    let err = services
        .laptops
        .report_problem(id, &report("Hinge", "Sam", "  a@b.c "))
        .unwrap_err();
    assert!(err.reason().contains("valid email"));
    assert!(services.laptops.get_by_id(id).unwrap().problems.is_empty());
}

#[test]
fn test_report_problem_prepends_open_problem() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;

    let older = services
        .laptops
        .report_problem(id, &report("Battery drains", "Sam", "a@b.c"))
        .unwrap();
    let newer = services
        .laptops
        .report_problem(id, &report("Broken key", "Kim", "kim@school.nl"))
        .unwrap();

    let problems = &services.laptops.get_by_id(id).unwrap().problems;
    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].id, newer.id);
    assert_eq!(problems[1].id, older.id);
    assert!(problems.iter().all(|p| p.is_open() && p.date_resolved().is_none()));
    assert_eq!(services.laptops.active_problems(id).unwrap().len(), 2);
}

#[test]
fn test_report_problem_on_unknown_laptop() {
    let mut services = empty_services();
    let err = services
        .laptops
        .report_problem(Uuid::new_v4(), &report("Hinge", "Sam", "a@b.c"))
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_resolve_problem_moves_it_to_resolved_view() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;
    let problem = services
        .laptops
        .report_problem(id, &report("Screen flickers", "Sam", "a@b.c"))
        .unwrap();

    let data = ResolveProblem {
        resolver_name: "Alex".to_string(),
        repair_details: "Replaced display cable".to_string(),
    };
    let resolved = services.laptops.resolve_problem(id, problem.id, &data).unwrap();
    assert!(resolved.date_resolved().is_some());
    assert_eq!(resolved.date_reported, problem.date_reported);

    assert!(services.laptops.active_problems(id).unwrap().is_empty());
    assert_eq!(services.laptops.resolved_problems(id).unwrap().len(), 1);

    let err = services.laptops.resolve_problem(id, problem.id, &data).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = services
        .laptops
        .resolve_problem(id, Uuid::new_v4(), &data)
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_status_counts() {
    let mut services = empty_services();
    let id = services.laptops.create(&laptop_form()).id;
    services.laptops.create(&laptop_form());
    services.laptops.change_status(id, LaptopStatus::Faulty).unwrap();

    let counts = services.laptops.status_counts();
    assert_eq!(counts[&LaptopStatus::InUse], 1);
    assert_eq!(counts[&LaptopStatus::Faulty], 1);
    assert_eq!(counts[&LaptopStatus::Available], 0);
}
