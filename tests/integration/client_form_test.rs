// End-to-end test of the client-side save path: update form -> HTTP
// service -> resource handler -> repository, against a live server
// bound to an ephemeral port.

use std::sync::Arc;

use actix_web::{App, HttpServer};

use propmgmnt::client::{EntityService, HttpEntityService, UpdateForm};
use propmgmnt::core::traits::EntityRepository;
use propmgmnt::modules::apartments::Apartment;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestRepos;

fn client_draft(name: &str) -> Apartment {
    Apartment {
        id: None,
        name: name.to_string(),
        address: None,
        floor: Some(1),
        room_count: None,
        monthly_rent: None,
        agreement_id: None,
    }
}

#[actix_web::test]
async fn test_update_form_round_trip_against_live_server() {
    let repos = TestRepos::new();
    let wiring = repos.clone();

    let server = HttpServer::new(move || App::new().configure(|cfg| wiring.configure(cfg)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind failed");
    let addr = server.addrs()[0];

    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let service: Arc<dyn EntityService<Apartment>> = Arc::new(HttpEntityService::new(
        format!("http://{}", addr),
        "apartments",
    ));

    // fresh draft: no id, so save() goes through the create call
    let mut form = UpdateForm::new(client_draft("Client Flat"), service.clone());
    let saved = form.save().await.expect("create save failed");
    assert_eq!(saved.id, Some(1));
    assert!(!form.is_saving());
    assert!(!form.is_open());

    // draft with an id: save() goes through the update call
    let mut renamed = saved.clone();
    renamed.name = "Client Flat renamed".to_string();
    let mut form = UpdateForm::new(renamed, service.clone());
    let saved = form.save().await.expect("update save failed");
    assert_eq!(saved.id, Some(1));
    assert_eq!(saved.name, "Client Flat renamed");

    // the store saw one record, with the replacement applied
    let stored = repos.apartments.find_all().await.expect("find_all failed");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Client Flat renamed");

    handle.stop(true).await;
}
