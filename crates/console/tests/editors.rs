//! Editors driven end to end through an in-memory backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use backoffice_auth::{Right, Role};
use backoffice_client::services::{
    PermissionFlag, PermissionRow, Proposition, PropositionBatchRequest, RawMaterial, ReadyItem,
    RoleRightMapping, RoleRightMappingRequest,
};
use backoffice_client::{ClientError, ClientResult};
use backoffice_console::{
    EditorPhase, MappingBackend, Notice, PropositionBackend, PropositionEditor,
    RoleRightMappingEditor,
};
use backoffice_core::{RawMaterialId, ReadyItemId, RightId, RoleId};

#[derive(Default)]
struct FakeServer {
    mappings: Mutex<HashMap<RoleId, Vec<PermissionRow>>>,
    saved: Mutex<Vec<RoleRightMappingRequest>>,
    propositions: Mutex<HashMap<ReadyItemId, Vec<Proposition>>>,
    reject_saves: Option<String>,
}

impl FakeServer {
    fn new() -> Self {
        backoffice_observability::init_for_tests();
        Self::default()
    }

    fn rejecting(message: &str) -> Self {
        Self {
            reject_saves: Some(message.to_string()),
            ..Self::new()
        }
    }

    fn rejection(&self) -> ClientResult<()> {
        match &self.reject_saves {
            Some(message) => Err(ClientError::Status {
                status: 400,
                message: Some(message.clone()),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MappingBackend for FakeServer {
    async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        Ok(vec![Role::new("Clerk").with_id(RoleId::new(5))])
    }

    async fn list_rights(&self) -> ClientResult<Vec<Right>> {
        Ok(vec![
            Right::new(RightId::new(1), "View"),
            Right::new(RightId::new(2), "Edit"),
        ])
    }

    async fn fetch_mapping(&self, role_id: RoleId) -> ClientResult<RoleRightMapping> {
        match self.mappings.lock().unwrap().get(&role_id) {
            Some(rows) => Ok(RoleRightMapping {
                role_id: Some(role_id),
                rows: rows.clone(),
            }),
            None => Err(ClientError::Status {
                status: 404,
                message: Some("Mapping not found".to_string()),
            }),
        }
    }

    async fn save_mapping(&self, request: &RoleRightMappingRequest) -> ClientResult<()> {
        self.rejection()?;
        self.saved.lock().unwrap().push(request.clone());
        self.mappings
            .lock()
            .unwrap()
            .insert(request.role_id, request.rights.clone());
        Ok(())
    }
}

#[async_trait]
impl PropositionBackend for FakeServer {
    async fn list_ready_items(&self) -> ClientResult<Vec<ReadyItem>> {
        Ok(vec![ReadyItem {
            id: Some(ReadyItemId::new(1)),
            name: "Bread".to_string(),
            ..ReadyItem::default()
        }])
    }

    async fn list_raw_materials(&self) -> ClientResult<Vec<RawMaterial>> {
        Ok(["Flour", "Water"]
            .iter()
            .enumerate()
            .map(|(i, name)| RawMaterial {
                id: Some(RawMaterialId::new(i as i64 + 1)),
                name: name.to_string(),
                ..RawMaterial::default()
            })
            .collect())
    }

    async fn fetch_propositions(&self, ready_item_id: ReadyItemId) -> ClientResult<Vec<Proposition>> {
        Ok(self
            .propositions
            .lock()
            .unwrap()
            .get(&ready_item_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_propositions(&self, request: &PropositionBatchRequest) -> ClientResult<()> {
        self.rejection()?;
        let stored = request
            .propositions
            .iter()
            .map(|line| Proposition {
                id: None,
                ready_item_id: request.ready_item_id,
                raw_material_id: line.raw_material_id,
                percentage: line.percentage,
            })
            .collect();
        self.propositions
            .lock()
            .unwrap()
            .insert(request.ready_item_id, stored);
        Ok(())
    }
}

#[tokio::test]
async fn new_role_mapping_sends_the_exact_batch() {
    let server = FakeServer::new();
    let mut editor = RoleRightMappingEditor::default();

    editor.load_catalogue(&server).await;
    editor.choose_role(&server, Some(RoleId::new(5))).await;
    assert_eq!(editor.phase(), EditorPhase::Editing);
    assert!(editor.rows().is_empty());
    assert_eq!(editor.notice(), None);

    let row = editor.add_row().unwrap();
    assert_eq!(editor.rows()[row].right_id, Some(RightId::new(1)));
    editor.toggle_permission(row, PermissionFlag::View, true).unwrap();

    editor.submit(&server).await.unwrap();

    let saved = server.saved.lock().unwrap().clone();
    assert_eq!(saved.len(), 1);
    assert_eq!(
        serde_json::to_value(&saved[0]).unwrap(),
        json!({
            "roleId": 5,
            "rights": [{
                "rightId": 1, "map": false, "view": true, "create": false,
                "update": false, "delete": false, "export": false, "print": false,
                "approve": false, "reject": false, "cancel": false
            }]
        })
    );

    // Refreshed from the server after the save.
    assert_eq!(editor.phase(), EditorPhase::Editing);
    assert_eq!(editor.rows(), saved[0].rights.as_slice());
    assert_eq!(
        editor.notice(),
        Some(&Notice::success("Rights mapped to role successfully"))
    );
}

#[tokio::test]
async fn rejected_mapping_keeps_the_rows() {
    let server = FakeServer::rejecting("Right is inactive");
    let mut editor = RoleRightMappingEditor::default();
    editor.load_catalogue(&server).await;
    editor.choose_role(&server, Some(RoleId::new(5))).await;
    editor.add_row().unwrap();
    editor.add_row().unwrap();

    editor.submit(&server).await.unwrap();

    assert_eq!(editor.phase(), EditorPhase::Editing);
    assert_eq!(editor.rows().len(), 2);
    assert_eq!(editor.notice(), Some(&Notice::error("Right is inactive")));
}

#[tokio::test]
async fn invalid_mapping_never_reaches_the_server() {
    let server = FakeServer::new();
    let mut editor = RoleRightMappingEditor::default();
    editor.load_catalogue(&server).await;
    editor.choose_role(&server, Some(RoleId::new(5))).await;

    assert!(editor.submit(&server).await.is_err());
    assert!(server.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn proposition_batch_round_trip() {
    let server = FakeServer::new();
    let mut editor = PropositionEditor::default();
    editor.load_catalogue(&server).await;
    assert_eq!(editor.raw_materials().len(), 2);

    editor.choose_ready_item(&server, Some(ReadyItemId::new(1))).await;
    editor.add_row().unwrap();
    editor.add_row().unwrap();
    editor.set_percentage(0, 70.0).unwrap();
    editor.set_percentage(1, 30.0).unwrap();

    editor.submit(&server).await.unwrap();

    assert_eq!(editor.phase(), EditorPhase::Editing);
    assert_eq!(editor.rows().len(), 2);
    assert!((editor.total() - 100.0).abs() < f64::EPSILON);
    assert!(editor.notice().is_some_and(|n| !n.is_error()));
}
