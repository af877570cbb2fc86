use til::db;
use til::domain::{
    Acronym, AcronymField, AcronymRepository, DomainError, User, UserField, UserRepository,
};
use til::infrastructure::{SeaOrmAcronymRepository, SeaOrmUserRepository};

// Helper to create fresh repositories over an in-memory database
async fn setup_repos() -> (SeaOrmAcronymRepository, SeaOrmUserRepository) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    (
        SeaOrmAcronymRepository::new(db.clone()),
        SeaOrmUserRepository::new(db),
    )
}

async fn create_test_user(users: &SeaOrmUserRepository, name: &str, username: &str) -> User {
    users
        .create(User::new(name, username))
        .await
        .expect("Failed to create user")
}

async fn create_test_acronym(
    acronyms: &SeaOrmAcronymRepository,
    short: &str,
    long: &str,
    owner: &User,
) -> Acronym {
    acronyms
        .create(Acronym::new(short, long, owner.id.unwrap()))
        .await
        .expect("Failed to create acronym")
}

#[tokio::test]
async fn test_create_then_fetch_acronym() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;

    let input = Acronym::new("OMG", "Oh My God", luke.id.unwrap());
    let created = acronyms.create(input.clone()).await.unwrap();
    let id = created.id.expect("identifier assigned");

    let fetched = acronyms.find_by_id(id).await.unwrap();
    assert_eq!(fetched, Acronym { id: Some(id), ..input });
}

#[tokio::test]
async fn test_create_user_assigns_uuid() {
    let (_, users) = setup_repos().await;

    let a = create_test_user(&users, "Luke", "lukes").await;
    let b = create_test_user(&users, "Leia", "leia").await;

    assert!(a.id.is_some());
    assert_ne!(a.id, b.id);
    assert_eq!(users.find_by_id(a.id.unwrap()).await.unwrap(), a);
}

#[tokio::test]
async fn test_create_acronym_with_unknown_owner_fails() {
    let (acronyms, _) = setup_repos().await;

    let result = acronyms
        .create(Acronym::new("OMG", "Oh My God", uuid::Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(DomainError::Database(_))));
    assert!(acronyms.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_keeps_identifier() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;
    let created = create_test_acronym(&acronyms, "OMG", "Oh My God", &luke).await;
    let id = created.id.unwrap();

    let changes = Acronym::new("OMGS", "Oh My Gosh", luke.id.unwrap());
    let updated = acronyms.update(id, changes).await.unwrap();

    assert_eq!(updated.id, Some(id));
    let fetched = acronyms.find_by_id(id).await.unwrap();
    assert_eq!(fetched.short, "OMGS");
    assert_eq!(fetched.long, "Oh My Gosh");
}

#[tokio::test]
async fn test_update_missing_acronym_is_not_found() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;

    let result = acronyms
        .update(42, Acronym::new("A", "B", luke.id.unwrap()))
        .await;
    assert!(matches!(result, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_update_can_move_acronym_to_another_user() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;
    let leia = create_test_user(&users, "Leia", "leia").await;
    let created = create_test_acronym(&acronyms, "OMG", "Oh My God", &luke).await;

    let moved = Acronym::new("OMG", "Oh My God", leia.id.unwrap());
    acronyms.update(created.id.unwrap(), moved).await.unwrap();

    assert!(users.find_acronyms(&luke).await.unwrap().is_empty());
    assert_eq!(users.find_acronyms(&leia).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_acronym() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;

    assert!(matches!(acronyms.delete(999).await, Err(DomainError::NotFound)));

    let created = create_test_acronym(&acronyms, "OMG", "Oh My God", &luke).await;
    let id = created.id.unwrap();
    acronyms.delete(id).await.unwrap();

    assert!(matches!(
        acronyms.find_by_id(id).await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_filter_eq_any_matches_short_or_long() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;

    let by_short = create_test_acronym(&acronyms, "OMG", "Oh My God", &luke).await;
    let by_long = create_test_acronym(&acronyms, "WTF", "OMG", &luke).await;
    create_test_acronym(&acronyms, "LOL", "Laugh Out Loud", &luke).await;
    create_test_acronym(&acronyms, "omg", "lowercase", &luke).await;

    let found = acronyms
        .filter_eq_any((AcronymField::Short, "OMG"), (AcronymField::Long, "OMG"))
        .await
        .unwrap();

    assert_eq!(found, vec![by_short, by_long]);
}

#[tokio::test]
async fn test_filter_eq_single_field() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;

    create_test_acronym(&acronyms, "OMG", "Oh My God", &luke).await;
    let lol = create_test_acronym(&acronyms, "LOL", "Laugh Out Loud", &luke).await;

    let found = acronyms
        .filter_eq(AcronymField::Long, "Laugh Out Loud")
        .await
        .unwrap();
    assert_eq!(found, vec![lol]);

    let none = acronyms.filter_eq(AcronymField::Short, "Laugh Out Loud").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_first_acronym() {
    let (acronyms, users) = setup_repos().await;
    assert_eq!(acronyms.first().await.unwrap(), None);

    let luke = create_test_user(&users, "Luke", "lukes").await;
    let earliest = create_test_acronym(&acronyms, "ZZZ", "Sleeping", &luke).await;
    create_test_acronym(&acronyms, "AAA", "Battery", &luke).await;

    assert_eq!(acronyms.first().await.unwrap(), Some(earliest));
}

#[tokio::test]
async fn test_sorted_by_short() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;

    for short in ["WTF", "AFK", "OMG", "BRB", "AFK"] {
        create_test_acronym(&acronyms, short, "expansion", &luke).await;
    }

    let ascending = acronyms.sorted_by(AcronymField::Short, true).await.unwrap();
    let shorts: Vec<&str> = ascending.iter().map(|a| a.short.as_str()).collect();
    assert_eq!(shorts, vec!["AFK", "AFK", "BRB", "OMG", "WTF"]);
    assert!(ascending.windows(2).all(|w| w[0].short <= w[1].short));

    let descending = acronyms.sorted_by(AcronymField::Short, false).await.unwrap();
    assert_eq!(descending.first().unwrap().short, "WTF");
}

#[tokio::test]
async fn test_parent_and_children() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;
    let leia = create_test_user(&users, "Leia", "leia").await;

    let a1 = create_test_acronym(&acronyms, "OMG", "Oh My God", &luke).await;
    let a2 = create_test_acronym(&acronyms, "LOL", "Laugh Out Loud", &luke).await;
    create_test_acronym(&acronyms, "BRB", "Be Right Back", &leia).await;

    let children = users.find_acronyms(&luke).await.unwrap();
    assert_eq!(children, vec![a1.clone(), a2]);

    let parent = acronyms.find_user(&a1).await.unwrap();
    assert_eq!(parent, luke);
}

#[tokio::test]
async fn test_children_of_unsaved_user_is_not_found() {
    let (_, users) = setup_repos().await;

    let result = users.find_acronyms(&User::new("Ghost", "ghost")).await;
    assert!(matches!(result, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_delete_user_rejected_while_owning_acronyms() {
    let (acronyms, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;
    let luke_id = luke.id.unwrap();
    let owned = create_test_acronym(&acronyms, "OMG", "Oh My God", &luke).await;

    assert!(matches!(
        users.delete(luke_id).await,
        Err(DomainError::Conflict(_))
    ));
    assert!(users.find_by_id(luke_id).await.is_ok());

    acronyms.delete(owned.id.unwrap()).await.unwrap();
    users.delete(luke_id).await.unwrap();

    assert!(matches!(
        users.find_by_id(luke_id).await,
        Err(DomainError::NotFound)
    ));
    assert!(matches!(
        users.delete(luke_id).await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_update_user() {
    let (_, users) = setup_repos().await;
    let luke = create_test_user(&users, "Luke", "lukes").await;
    let id = luke.id.unwrap();

    let updated = users
        .update(id, User::new("Luke Skywalker", "jedi"))
        .await
        .unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(users.find_by_id(id).await.unwrap().username, "jedi");
}

#[tokio::test]
async fn test_user_queries() {
    let (_, users) = setup_repos().await;
    assert_eq!(users.first().await.unwrap(), None);

    let zed = create_test_user(&users, "Zed", "zed").await;
    let amy = create_test_user(&users, "Amy", "amy").await;
    let max = create_test_user(&users, "Max", "amy2").await;

    assert_eq!(users.first().await.unwrap(), Some(zed.clone()));
    assert_eq!(
        users.find_all().await.unwrap(),
        vec![zed.clone(), amy.clone(), max.clone()]
    );

    let sorted = users.sorted_by(UserField::Name, true).await.unwrap();
    assert_eq!(sorted, vec![amy.clone(), max.clone(), zed.clone()]);

    assert_eq!(
        users.filter_eq(UserField::Username, "amy").await.unwrap(),
        vec![amy.clone()]
    );
    assert_eq!(
        users
            .filter_eq_any((UserField::Name, "Zed"), (UserField::Username, "amy2"))
            .await
            .unwrap(),
        vec![zed, max]
    );
}
