use docslot_core::{DocumentNode, PageMetadata, Slot, link_neighbours};
use docslot_render::registry::{Binding, ComponentConfig, Provider};
use docslot_render::renderer::{ContentInstruction, HeadingLevel, Inline, ManifestResolver};
use docslot_render::{
    BatchInput, BatchOptions, ComponentBindingSet, OverrideRequest, Page, RenderOptions, defaults,
    render, render_batch, render_page, resolve,
};

fn alert_instructions() -> Vec<ContentInstruction> {
    vec![
        ContentInstruction::heading(HeadingLevel::H1, "Alert API"),
        ContentInstruction::Callout {
            summary: vec![
                Inline::code("POST"),
                Inline::strong(vec![Inline::text("/api/widgets/alert")]),
            ],
            open: true,
            children: vec![
                ContentInstruction::heading(HeadingLevel::H5, "Headers"),
                ContentInstruction::Blockquote {
                    children: vec![ContentInstruction::Table {
                        headers: ["name", "type", "data type", "description"]
                            .iter()
                            .map(|h| vec![Inline::text(*h)])
                            .collect(),
                        rows: vec![vec![
                            vec![Inline::text("Authorization")],
                            vec![Inline::text("required")],
                            vec![Inline::text("String")],
                            vec![Inline::code("Bearer <Access Token>")],
                        ]],
                    }],
                },
                ContentInstruction::heading(HeadingLevel::H5, "Responses"),
                ContentInstruction::CodeBlock {
                    lang: Some("json".to_string()),
                    meta: Some("title=\"RESPONSE DATA\"".to_string()),
                    body: "[]\n".to_string(),
                },
            ],
        },
        ContentInstruction::image("Home Alert 1", "home_alert", 653, 492),
    ]
}

fn details() -> Binding {
    Binding::from_fn("Details", |props, children| {
        let mut node = DocumentNode::element("details");
        for (name, value) in props {
            node = node.with_attr(name.as_str(), value.clone());
        }
        node.with_children(children)
    })
}

#[test]
fn concrete_three_instruction_page() {
    let instructions = vec![
        ContentInstruction::heading(HeadingLevel::H1, "Alert API"),
        ContentInstruction::table(&["name", "type"], &[&["Authorization", "required"]]),
        ContentInstruction::code_block(Some("json"), "{}"),
    ];
    let root = render(&defaults(), &instructions).unwrap();

    let slots: Vec<Option<Slot>> = root.children().iter().map(DocumentNode::slot).collect();
    assert_eq!(
        slots,
        vec![Some(Slot::Heading1), Some(Slot::Table), Some(Slot::CodeBlock)]
    );
    assert_eq!(root.children()[1].text_content(), "nametypeAuthorizationrequired");
}

#[test]
fn rendered_tree_snapshot() {
    let root = render(
        &defaults(),
        &[
            ContentInstruction::heading(HeadingLevel::H1, "Alert API"),
            ContentInstruction::code_block(Some("json"), "{}"),
        ],
    )
    .unwrap();

    insta::assert_json_snapshot!(root, @r#"
    {
      "type": "fragment",
      "children": [
        {
          "type": "element",
          "tag": "h1",
          "slot": "heading1",
          "attributes": {
            "id": "alert-api"
          },
          "children": [
            {
              "type": "text",
              "value": "Alert API"
            }
          ]
        },
        {
          "type": "element",
          "tag": "pre",
          "slot": "codeBlock",
          "children": [
            {
              "type": "element",
              "tag": "code",
              "slot": "code",
              "attributes": {
                "className": "language-json"
              },
              "children": [
                {
                  "type": "text",
                  "value": "{}"
                }
              ]
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn alert_page_needs_callout_binding() {
    let err = render(&resolve(OverrideRequest::new()), &alert_instructions()).unwrap_err();
    assert_eq!(
        err.as_missing_component().map(|e| e.slot),
        Some(Slot::Callout)
    );
    assert!(
        err.to_string()
            .starts_with("Expected component `callout` to be defined"),
        "{err}"
    );

    let bindings = resolve(OverrideRequest::new().with(Slot::Callout, details()));
    let root = render(&bindings, &alert_instructions()).unwrap();
    assert_eq!(root.children().len(), 3);
    assert_eq!(root.children()[1].tag(), Some("details"));
}

#[test]
fn override_precedence_over_defaults() {
    let custom = Binding::markup("section");
    let resolved = resolve(OverrideRequest::new().with(Slot::Blockquote, custom.clone()));
    let base = defaults();

    assert_eq!(resolved.get(Slot::Blockquote), Some(&custom));
    for slot in Slot::ALL {
        if slot != Slot::Blockquote {
            assert_eq!(resolved.get(slot), base.get(slot), "{slot}");
        }
    }
    // Defaults are never written through.
    assert_ne!(base.get(Slot::Blockquote), Some(&custom));
}

#[test]
fn resolve_is_idempotent_for_config_overrides() {
    let config = ComponentConfig::from_yaml("slots:\n  table:\n    tag: table\n    class: api\n")
        .unwrap();
    let first = resolve(config.to_overrides());
    let again = resolve(OverrideRequest::from(first.clone()));
    assert_eq!(first, again);
}

#[test]
fn provider_layers_feed_page_rendering() {
    let site =
        Provider::root().with_overrides(OverrideRequest::new().with(Slot::Callout, details()));
    let page_scope =
        site.with_overrides(OverrideRequest::new().with(Slot::Wrapper, Binding::markup("article")));
    let page = Page {
        metadata: PageMetadata {
            title: "Alert API".to_string(),
            permalink: "/docs/homepage/alert".to_string(),
            ..Default::default()
        },
        instructions: alert_instructions(),
    };
    let resolver = ManifestResolver::new("/docs/")
        .with_entry("home_alert", "assets/images/home_alert-de19a0fd.png");

    let rendered = render_page(
        page_scope.bindings(),
        &page,
        &RenderOptions {
            assets: Some(&resolver),
        },
    )
    .unwrap();

    assert_eq!(rendered.root.tag(), Some("article"));
    assert_eq!(rendered.content_title.as_deref(), Some("Alert API"));
    let toc: Vec<&str> = rendered.toc.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(toc, vec!["headers", "responses"]);
}

#[test]
fn concurrent_renders_match_sequential() {
    let scope = Provider::root();
    let pages: Vec<Page> = (0..16)
        .map(|i| Page {
            metadata: PageMetadata {
                id: format!("page-{i}"),
                title: format!("Page {i}"),
                ..Default::default()
            },
            instructions: vec![
                ContentInstruction::heading(HeadingLevel::H1, format!("Page {i}")),
                ContentInstruction::heading(HeadingLevel::H2, "Example"),
                ContentInstruction::heading(HeadingLevel::H2, "Example"),
                ContentInstruction::paragraph(format!("body {i}")),
            ],
        })
        .collect();

    let sequential: Vec<_> = pages
        .iter()
        .map(|page| render_page(scope.bindings(), page, &RenderOptions::default()).unwrap())
        .collect();

    let threaded: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = pages
            .iter()
            .map(|page| {
                let scope = &scope;
                s.spawn(move || {
                    render_page(scope.bindings(), page, &RenderOptions::default()).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, threaded);

    let inputs = pages
        .iter()
        .map(|page| BatchInput::new(page.metadata.id.clone(), page.clone()))
        .collect();
    let batch = render_batch(
        &scope,
        inputs,
        &BatchOptions {
            max_threads: Some(4),
            ..Default::default()
        },
    );
    let batched: Vec<_> = batch
        .results
        .into_iter()
        .map(|r| r.result.expect("page rendered"))
        .collect();
    assert_eq!(sequential, batched);
    assert_eq!(batch.stats.succeeded, 16);
}

#[test]
fn neighbours_pass_through_rendering() {
    let mut metas = vec![
        PageMetadata {
            title: "Alert API".to_string(),
            permalink: "/docs/homepage/alert".to_string(),
            sidebar_position: Some(3.0),
            ..Default::default()
        },
        PageMetadata {
            title: "Team Overview API".to_string(),
            permalink: "/docs/homepage/team-overview".to_string(),
            sidebar_position: Some(2.0),
            ..Default::default()
        },
    ];
    link_neighbours(&mut metas);

    let page = Page {
        metadata: metas[0].clone(),
        instructions: vec![ContentInstruction::heading(HeadingLevel::H1, "Alert API")],
    };
    let rendered =
        render_page(&ComponentBindingSet::builtin(), &page, &RenderOptions::default()).unwrap();
    assert_eq!(
        rendered.metadata.previous.as_ref().map(|l| l.title.as_str()),
        Some("Team Overview API")
    );
    assert_eq!(rendered.metadata, metas[0]);
}
