use super::*;
use crate::ir::{
    AllowedRelation, CaveatDefinition, Metadata, MetadataEntry, RelationDecl, RelationKind,
    SetOperationChild, UsersetRewrite,
};
use crate::snapshot_schema;
use crate::types::{Operation, UserSet};
use serde_json::json;
use yare::parameterized;


const FOLDER_SCHEMA: &str = include_str!("../../../testdata/folder_schema.json");

const FOLDER_SCHEMA_JSON: &str = concat!(
    r#"{"definitions":["#,
    r#"{"name":"user","comment":"someone who can sign in"},"#,
    r#"{"name":"folder","relations":[{"name":"viewer","types":[{"type":"user"}]}],"#,
    r#""permissions":[{"name":"view","userSet":{"operation":"union","children":[{"relation":"viewer"}]}}]},"#,
    r#"{"name":"document","relations":[{"name":"parent","types":[{"type":"folder"}]},"#,
    r#"{"name":"reader","types":[{"type":"user","relation":"*","caveat":"on_weekdays"}],"comment":"anyone, on weekdays"}],"#,
    r#""permissions":[{"name":"view","userSet":{"operation":"union","children":[{"relation":"reader"},{"relation":"parent","permission":"view"}]}}]}],"#,
    r#""caveats":[{"name":"on_weekdays","parameters":["timestamp"]}]}"#,
);

/// `acme/user`, `acme/group` and a commented `acme/document` with relations
/// and permissions interleaved, plus one caveat.
fn acme_schema() -> CompiledSchema {
    CompiledSchema::new(
        vec![
            NamespaceDefinition::new("acme/user", vec![]).with_comment("/** a person */"),
            NamespaceDefinition::new(
                "acme/group",
                vec![RelationDecl::relation(
                    "member",
                    vec![
                        AllowedRelation::direct("acme/user"),
                        AllowedRelation::with_relation("acme/group", "member"),
                    ],
                )],
            ),
            NamespaceDefinition::new(
                "acme/document",
                vec![
                    RelationDecl::relation(
                        "viewer",
                        vec![
                            AllowedRelation::direct("acme/user"),
                            AllowedRelation::wildcard("acme/user"),
                            AllowedRelation::with_relation("acme/group", "member"),
                        ],
                    )
                    .with_comment("/** can read the document */"),
                    RelationDecl::permission(
                        "view",
                        UsersetRewrite::union([
                            SetOperationChild::computed("viewer"),
                            SetOperationChild::rewrite(UsersetRewrite::exclusion([
                                SetOperationChild::computed("editor"),
                                SetOperationChild::computed("banned"),
                            ])),
                        ]),
                    )
                    .with_comment("// viewers and editors, minus the banned"),
                    RelationDecl::relation(
                        "editor",
                        vec![AllowedRelation::direct("acme/user").with_caveat("ip_allowlist")],
                    ),
                    RelationDecl::relation("banned", vec![AllowedRelation::direct("acme/user")]),
                    RelationDecl::permission(
                        "edit",
                        UsersetRewrite::intersection([
                            SetOperationChild::computed("editor"),
                            SetOperationChild::tuple_to_userset("parent", "edit"),
                        ]),
                    ),
                ],
            )
            .with_comment("/**\n * a document\n * in a folder\n */"),
        ],
        vec![
            CaveatDefinition::new("ip_allowlist", ["ipaddress", "list<ipaddress>"])
                .with_comment("// only from known networks"),
        ],
    )
}

#[parameterized(
    namespaced = { "acme/document", "acme", "document" },
    bare = { "document", "", "document" },
    nested_separator = { "acme/docs/document", "acme", "docs/document" },
    leading_separator = { "/document", "", "document" },
    empty = { "", "", "" },
)]
fn test_split_qualified_name(qualified: &str, namespace: &str, name: &str) {
    assert_eq!(split_qualified_name(qualified), (namespace, name));
}

#[test]
fn test_definitions_keep_ir_order() {
    let schema = map_schema(&acme_schema()).unwrap();
    let names: Vec<String> = schema.definitions.iter().map(|d| d.qualified_name()).collect();
    assert_eq!(names, vec!["acme/user", "acme/group", "acme/document"]);
}

#[test]
fn test_relations_and_permissions_are_partitioned_in_order() {
    let schema = map_schema(&acme_schema()).unwrap();
    let document = schema.definition("acme/document").unwrap();

    let relations: Vec<&str> = document.relations.iter().map(|r| r.name.as_str()).collect();
    let permissions: Vec<&str> = document.permissions.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(relations, vec!["viewer", "editor", "banned"]);
    assert_eq!(permissions, vec!["view", "edit"]);
}

#[test]
fn test_every_relation_maps_to_exactly_one_entry() {
    let compiled = acme_schema();
    let schema = map_schema(&compiled).unwrap();
    for (ir, exported) in compiled.object_definitions.iter().zip(&schema.definitions) {
        assert_eq!(
            ir.relations.len(),
            exported.relations.len() + exported.permissions.len()
        );
    }
}

#[test]
fn test_definition_comments() {
    let schema = map_schema(&acme_schema()).unwrap();
    assert_eq!(schema.definitions[0].comment, "a person");
    assert_eq!(schema.definitions[1].comment, "");
    assert_eq!(schema.definitions[2].comment, "a document\nin a folder");
}

#[test]
fn test_intersection_with_tupleset() {
    let schema = map_schema(&acme_schema()).unwrap();
    let edit = &schema.definition("acme/document").unwrap().permissions[1];
    assert_eq!(
        edit.user_set,
        Some(UserSet::operation(
            Operation::Intersection,
            vec![
                UserSet::relation("editor"),
                UserSet::tuple_to_userset("parent", "edit"),
            ]
        ))
    );
}

#[test]
fn test_caveats_are_mapped() {
    let schema = map_schema(&acme_schema()).unwrap();
    assert_eq!(schema.caveats.len(), 1);
    assert_eq!(schema.caveats[0].name, "ip_allowlist");
    assert_eq!(schema.caveats[0].parameters, vec!["ipaddress", "list<ipaddress>"]);
    assert_eq!(schema.caveats[0].comment, "only from known networks");
}

#[test]
fn test_document_definition_snapshot() {
    let schema = map_schema(&acme_schema()).unwrap();
    snapshot_schema!(schema.definition("acme/document").unwrap(), @r#"
    {
      "name": "document",
      "namespace": "acme",
      "relations": [
        {
          "name": "viewer",
          "types": [
            {
              "type": "acme/user"
            },
            {
              "type": "acme/user",
              "relation": "*"
            },
            {
              "type": "acme/group",
              "relation": "member"
            }
          ],
          "comment": "can read the document"
        },
        {
          "name": "editor",
          "types": [
            {
              "type": "acme/user",
              "caveat": "ip_allowlist"
            }
          ]
        },
        {
          "name": "banned",
          "types": [
            {
              "type": "acme/user"
            }
          ]
        }
      ],
      "permissions": [
        {
          "name": "view",
          "userSet": {
            "operation": "union",
            "children": [
              {
                "relation": "viewer"
              },
              {
                "operation": "exclusion",
                "children": [
                  {
                    "relation": "editor"
                  },
                  {
                    "relation": "banned"
                  }
                ]
              }
            ]
          },
          "comment": "viewers and editors, minus the banned"
        },
        {
          "name": "edit",
          "userSet": {
            "operation": "intersection",
            "children": [
              {
                "relation": "editor"
              },
              {
                "relation": "parent",
                "permission": "edit"
              }
            ]
          }
        }
      ],
      "comment": "a document\nin a folder"
    }
    "#);
}

#[test]
fn test_json_fixture_exports_expected_document() {
    let compiled = crate::parse_compiled_schema(FOLDER_SCHEMA).unwrap();
    let exported = export_json(&compiled).unwrap();
    assert_eq!(exported, FOLDER_SCHEMA_JSON);
}

#[test]
fn test_caveats_omitted_without_caveat_definitions() {
    let mut compiled = acme_schema();
    compiled.caveat_definitions.clear();

    let value: serde_json::Value = serde_json::from_str(&export_json(&compiled).unwrap()).unwrap();
    assert!(value.get("caveats").is_none());
    assert_eq!(value["definitions"].as_array().unwrap().len(), 3);
}

#[test]
fn test_empty_schema() {
    let exported = export_json(&CompiledSchema::default()).unwrap();
    assert_eq!(exported, r#"{"definitions":[]}"#);
}

#[test]
fn test_definition_without_relations_omits_lists() {
    let compiled = CompiledSchema::new(vec![NamespaceDefinition::new("user", vec![])], vec![]);
    let value = serde_json::to_value(map_schema(&compiled).unwrap()).unwrap();
    assert_eq!(value, json!({"definitions": [{"name": "user"}]}));
}

#[test]
fn test_custom_doc_comment_type_url() {
    let legacy = "type.googleapis.com/impl.iv1.DocComment";
    let mut entry = MetadataEntry::doc_comment("// legacy comment");
    entry.type_url = legacy.to_string();
    let mut definition = NamespaceDefinition::new("user", vec![]);
    definition.metadata = Metadata::new(vec![entry]);
    let compiled = CompiledSchema::new(vec![definition], vec![]);

    let default_export = map_schema(&compiled).unwrap();
    assert_eq!(default_export.definitions[0].comment, "");

    let exporter =
        SchemaExporter::with_options(ExportOptions::new().with_doc_comment_type_url(legacy));
    let legacy_export = exporter.map_schema(&compiled).unwrap();
    assert_eq!(legacy_export.definitions[0].comment, "legacy comment");
}

#[test]
fn test_dropped_children_do_not_fail_by_default() {
    let compiled = CompiledSchema::new(
        vec![NamespaceDefinition::new(
            "document",
            vec![RelationDecl::permission(
                "view",
                UsersetRewrite::union([SetOperationChild::This, SetOperationChild::computed("viewer")]),
            )],
        )],
        vec![],
    );
    let schema = map_schema(&compiled).unwrap();
    assert_eq!(
        schema.definitions[0].permissions[0].user_set,
        Some(UserSet::operation(Operation::Union, vec![UserSet::relation("viewer")]))
    );
}

#[test]
fn test_relation_kind_metadata_alongside_comments() {
    let decl = RelationDecl::relation("viewer", vec![AllowedRelation::direct("user")])
        .with_metadata(Metadata::new(vec![
            MetadataEntry::doc_comment("// first"),
            MetadataEntry::relation_kind(RelationKind::Relation),
            MetadataEntry::doc_comment("// second"),
        ]));
    let compiled = CompiledSchema::new(vec![NamespaceDefinition::new("doc", vec![decl])], vec![]);
    let schema = map_schema(&compiled).unwrap();
    assert_eq!(schema.definitions[0].relations[0].comment, "first\nsecond");
}
