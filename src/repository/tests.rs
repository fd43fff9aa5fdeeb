//! Repository Integration Tests
//!
//! Exercises the persistence client against an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::client::DbClient;
    use crate::domain::{DbError, ItemFields, ListFields};
    use crate::events::ChangeEvent;

    async fn setup() -> DbClient {
        DbClient::open_in_memory()
            .await
            .expect("Failed to init test DB")
    }

    fn item_fields(name: &str) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            description: None,
        }
    }

    fn list_fields(name: &str) -> ListFields {
        ListFields {
            name: name.to_string(),
            icon_name: None,
        }
    }

    fn ids(items: &[crate::domain::Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn test_create_item() {
        let client = setup().await;

        let created = client
            .create_item(
                ItemFields {
                    name: "Celular".to_string(),
                    description: Some("con funda".to_string()),
                },
                &[],
            )
            .await
            .expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.name, "Celular");

        let found = client.get_item(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_created_item_appears_in_each_selected_list() {
        let client = setup().await;
        let general = client.create_list(list_fields("general"), &[]).await.unwrap();
        let deportes = client.create_list(list_fields("deportes"), &[]).await.unwrap();

        let item = client
            .create_item(item_fields("Auriculares"), &[general.id, deportes.id])
            .await
            .unwrap();

        for list in [&general, &deportes] {
            let members = client.list_items_in_list(list.id).await.unwrap();
            assert_eq!(ids(&members), vec![item.id]);
        }
    }

    #[tokio::test]
    async fn test_listing_is_ordered_by_id() {
        let client = setup().await;
        let a = client.create_item(item_fields("Celular"), &[]).await.unwrap();
        let b = client.create_item(item_fields("Cargador"), &[]).await.unwrap();
        let c = client.create_item(item_fields("Mochila"), &[]).await.unwrap();

        let all = client.list_all_items().await.unwrap();
        assert_eq!(ids(&all), vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn test_items_in_empty_list_is_empty() {
        let client = setup().await;
        let list = client.create_list(list_fields("general"), &[]).await.unwrap();
        assert!(client.list_items_in_list(list.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_item_is_full_replace() {
        let client = setup().await;
        let item = client
            .create_item(
                ItemFields {
                    name: "Botella".to_string(),
                    description: Some("de agua".to_string()),
                },
                &[],
            )
            .await
            .unwrap();

        let updated = client
            .update_item(item.id, item_fields("Botella grande"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Botella grande");

        // the omitted description was replaced, not kept
        let found = client.get_item(item.id).await.unwrap().unwrap();
        assert!(found.description.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let client = setup().await;
        let result = client.update_item(999, item_fields("nada")).await;
        assert!(matches!(result, Err(DbError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_item_removes_it_from_every_list() {
        let client = setup().await;
        let general = client.create_list(list_fields("general"), &[]).await.unwrap();
        let deportes = client.create_list(list_fields("deportes"), &[]).await.unwrap();
        let item = client
            .create_item(item_fields("Auriculares"), &[general.id, deportes.id])
            .await
            .unwrap();

        client.delete_item(item.id).await.unwrap();

        assert!(client.list_items_in_list(general.id).await.unwrap().is_empty());
        assert!(client.list_items_in_list(deportes.id).await.unwrap().is_empty());
        assert!(client.list_all_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_item_from_single_list_keeps_it_elsewhere() {
        let client = setup().await;
        let general = client.create_list(list_fields("general"), &[]).await.unwrap();
        let deportes = client.create_list(list_fields("deportes"), &[]).await.unwrap();
        let item = client
            .create_item(item_fields("Auriculares"), &[general.id, deportes.id])
            .await
            .unwrap();

        client
            .delete_item_from_list(item.id, deportes.id)
            .await
            .unwrap();

        assert!(client.list_items_in_list(deportes.id).await.unwrap().is_empty());
        assert_eq!(
            ids(&client.list_items_in_list(general.id).await.unwrap()),
            vec![item.id]
        );
        assert_eq!(ids(&client.list_all_items().await.unwrap()), vec![item.id]);
    }

    #[tokio::test]
    async fn test_delete_item_from_list_it_is_not_in() {
        let client = setup().await;
        let list = client.create_list(list_fields("general"), &[]).await.unwrap();
        let item = client.create_item(item_fields("Celular"), &[]).await.unwrap();

        let result = client.delete_item_from_list(item.id, list.id).await;
        assert!(matches!(result, Err(DbError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_list_replaces_membership_exactly() {
        let client = setup().await;
        let a = client.create_item(item_fields("Celular"), &[]).await.unwrap();
        let b = client.create_item(item_fields("Cargador"), &[]).await.unwrap();
        let c = client.create_item(item_fields("Mochila"), &[]).await.unwrap();

        let general = client
            .create_list(list_fields("General"), &[a.id, b.id, c.id])
            .await
            .unwrap();
        assert_eq!(
            ids(&client.list_items_in_list(general.id).await.unwrap()),
            vec![a.id, b.id, c.id]
        );

        client
            .update_list(general.id, list_fields("General"), &[a.id, b.id])
            .await
            .unwrap();
        assert_eq!(
            ids(&client.list_items_in_list(general.id).await.unwrap()),
            vec![a.id, b.id]
        );

        // same member set again: exact result, not a union
        client
            .update_list(general.id, list_fields("General"), &[a.id, b.id])
            .await
            .unwrap();
        assert_eq!(
            ids(&client.list_items_in_list(general.id).await.unwrap()),
            vec![a.id, b.id]
        );
    }

    #[tokio::test]
    async fn test_update_missing_list_is_not_found() {
        let client = setup().await;
        let result = client.update_list(42, list_fields("nada"), &[]).await;
        assert!(matches!(result, Err(DbError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_list_keeps_items_shared_with_others() {
        let client = setup().await;
        let general = client.create_list(list_fields("general"), &[]).await.unwrap();
        let deportes = client.create_list(list_fields("deportes"), &[]).await.unwrap();
        let shared = client
            .create_item(item_fields("Auriculares"), &[general.id, deportes.id])
            .await
            .unwrap();

        client.delete_list(deportes.id).await.unwrap();

        assert!(client.get_list(deportes.id).await.unwrap().is_none());
        assert_eq!(ids(&client.list_all_items().await.unwrap()), vec![shared.id]);
        assert_eq!(
            ids(&client.list_items_in_list(general.id).await.unwrap()),
            vec![shared.id]
        );
    }

    #[tokio::test]
    async fn test_get_list() {
        let client = setup().await;
        let created = client
            .create_list(
                ListFields {
                    name: "deportes".to_string(),
                    icon_name: Some("fitness".to_string()),
                },
                &[],
            )
            .await
            .unwrap();

        let found = client.get_list(created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert!(client.get_list(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_item_with_unknown_list_rolls_back() {
        let client = setup().await;

        let result = client.create_item(item_fields("Celular"), &[999]).await;
        assert!(matches!(result, Err(DbError::Query(_))));

        // the item insert was rolled back with the failed association
        assert!(client.list_all_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reopen_existing_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simple_list.db");

        {
            let client = DbClient::open_at(&path).await.unwrap();
            client.create_item(item_fields("Celular"), &[]).await.unwrap();
        }

        // schema re-applies without clobbering existing rows
        let client = DbClient::open_at(&path).await.unwrap();
        let items = client.list_all_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Celular");
    }

    #[tokio::test]
    async fn test_mutations_publish_to_subscribers() {
        let client = setup().await;
        let mut rx = client.subscribe();

        let list = client.create_list(list_fields("general"), &[]).await.unwrap();
        match rx.try_recv().unwrap() {
            ChangeEvent::ListCreated { list: published, item_ids } => {
                assert_eq!(published, list);
                assert!(item_ids.is_empty());
            }
            other => panic!("expected ListCreated, got {:?}", other),
        }

        let item = client
            .create_item(item_fields("Celular"), &[list.id])
            .await
            .unwrap();
        match rx.try_recv().unwrap() {
            ChangeEvent::ItemCreated { item: published, list_ids } => {
                assert_eq!(published, item);
                assert_eq!(list_ids, vec![list.id]);
            }
            other => panic!("expected ItemCreated, got {:?}", other),
        }

        client
            .delete_item_from_list(item.id, list.id)
            .await
            .unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            ChangeEvent::ItemRemovedFromList {
                item_id: item.id,
                list_id: list.id
            }
        );

        client.delete_item(item.id).await.unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            ChangeEvent::ItemDeleted { id: item.id }
        );
    }

    #[tokio::test]
    async fn test_failed_mutation_publishes_nothing() {
        let client = setup().await;
        let mut rx = client.subscribe();

        let _ = client.create_item(item_fields("Celular"), &[999]).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_subscriber_attached_after_deletion_sees_nothing() {
        let client = setup().await;
        let item = client.create_item(item_fields("Celular"), &[]).await.unwrap();
        client.delete_item(item.id).await.unwrap();

        let mut rx = client.subscribe();
        assert!(rx.try_recv().is_err());
    }
}
