//! Generation and route registration over `MemoryFilesystem`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use kyugo_adapters::{EmbeddedTemplateStore, FixedClock, JinjaRenderer, MemoryFilesystem};
use kyugo_core::application::{RouteOutcome, SkipReason};
use kyugo_core::domain::{DomainError, ImportEdit};
use kyugo_core::prelude::*;

const ROOT: &str = "/srv/shop";
const MODULE: &str = "github.com/acme/shop";
const ROUTE_FILE: &str = "/srv/shop/http/route/route.go";
const ROUTE: &str = "package route\n\nimport (\n)\n\nfunc Register() {\n}\n";

fn service(fs: &MemoryFilesystem) -> GenerateService {
    let at = NaiveDate::from_ymd_opt(2024, 5, 6)
        .unwrap()
        .and_hms_opt(7, 8, 9)
        .unwrap();
    GenerateService::new(
        Box::new(EmbeddedTemplateStore::builtin()),
        Box::new(JinjaRenderer::new()),
        Arc::new(fs.clone()),
        Box::new(FixedClock(at)),
    )
}

fn controller(name: &str) -> GenerateRequest {
    GenerateRequest::new(ROOT, MODULE, ArtefactKind::Controller, name)
}

fn route_text(fs: &MemoryFilesystem) -> String {
    fs.read_file(Path::new(ROUTE_FILE)).unwrap()
}

#[test]
fn registration_reaches_a_fixed_point() {
    let fs = MemoryFilesystem::new().with_file(ROUTE_FILE, ROUTE);

    let report = service(&fs).generate(&controller("user")).unwrap();
    assert!(matches!(
        report.route,
        Some(RouteOutcome::Registered {
            import: ImportEdit::InsertedIntoBlock,
            ..
        })
    ));
    let after_first = route_text(&fs);
    assert_eq!(
        after_first,
        "package route\n\nimport (\n\t\"github.com/acme/shop/http/controller/user\"\n)\n\n\
         func Register() {\n\tuser.Controller(user.NewController())\n}\n"
    );

    let registration =
        ControllerRegistration::new("github.com/acme/shop/http/controller/user", "user");
    let outcome = RouteRegistrar::new(Arc::new(fs.clone()))
        .register(Path::new(ROUTE_FILE), &registration)
        .unwrap();
    assert!(matches!(outcome, RouteOutcome::AlreadyRegistered { .. }));
    assert_eq!(route_text(&fs), after_first);
}

#[test]
fn second_controller_run_collides_without_touching_anything() {
    let fs = MemoryFilesystem::new().with_file(ROUTE_FILE, ROUTE);
    let svc = service(&fs);

    svc.generate(&controller("user")).unwrap();
    let files = fs.list_files();
    let route = route_text(&fs);

    let err = svc.generate(&controller("user")).unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(fs.list_files(), files);
    assert_eq!(route_text(&fs), route);
}

#[test]
fn controller_whose_name_ends_another_is_still_registered() {
    let fs = MemoryFilesystem::new().with_file(ROUTE_FILE, ROUTE);
    let svc = service(&fs);

    svc.generate(&controller("superuser")).unwrap();
    let report = svc.generate(&controller("user")).unwrap();

    assert!(matches!(report.route, Some(RouteOutcome::Registered { .. })));
    let route = route_text(&fs);
    assert!(route.contains("\tsuperuser.Controller(superuser.NewController())\n"));
    assert!(route.contains("\tuser.Controller(user.NewController())\n"));
    assert!(route.contains("\t\"github.com/acme/shop/http/controller/user\"\n"));
}

#[test]
fn route_file_without_register_is_skipped_untouched() {
    let source = "package route\n\nimport (\n)\n";
    let fs = MemoryFilesystem::new().with_file(ROUTE_FILE, source);

    let report = service(&fs).generate(&controller("user")).unwrap();

    assert_eq!(
        report.written,
        vec![PathBuf::from("/srv/shop/http/controller/user/user.go")]
    );
    assert_eq!(
        report.route,
        Some(RouteOutcome::Skipped {
            route_file: PathBuf::from(ROUTE_FILE),
            reason: SkipReason::RegisterFunctionMissing,
        })
    );
    assert_eq!(route_text(&fs), source);
}

#[test]
fn unknown_kind_writes_nothing() {
    let fs = MemoryFilesystem::new().with_file(ROUTE_FILE, ROUTE);
    let svc = service(&fs);

    let err = GenerateRequest::parse(ROOT, MODULE, "unknown_kind", "user")
        .and_then(|request| svc.generate(&request))
        .unwrap_err();

    assert!(matches!(err, KyugoError::Domain(DomainError::InvalidKind(_))));
    assert_eq!(fs.list_files(), vec![PathBuf::from(ROUTE_FILE)]);
    assert_eq!(route_text(&fs), ROUTE);
}

#[test]
fn migrations_in_the_same_second_get_distinct_stamps() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    let request = GenerateRequest::new(ROOT, MODULE, ArtefactKind::Migration, "orders");

    svc.generate(&request).unwrap();
    svc.generate(&request).unwrap();

    let migrations = fs
        .list_dir(Path::new("/srv/shop/database/migrations"))
        .unwrap();
    assert_eq!(
        migrations,
        vec![
            "20240506070809_orders.down.sql",
            "20240506070809_orders.up.sql",
            "20240506070810_orders.down.sql",
            "20240506070810_orders.up.sql",
        ]
    );
}
