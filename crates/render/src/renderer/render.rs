//! Rendering functions for content instructions.

use super::context::Context;
use super::types::{Cell, ContentInstruction, Inline};
use docslot_core::{
    DocumentNode, InstructionPath, PropValue, Props, RenderError, Slot, split_explicit_anchor,
};

/// Renders a sequence of instructions in order.
///
/// Stops at the first error; no partial output is returned.
pub fn render_sequence(
    instructions: &[ContentInstruction],
    ctx: &mut Context,
    parent: &InstructionPath,
) -> Result<Vec<DocumentNode>, RenderError> {
    instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| render_instruction(instruction, ctx, &parent.child(index)))
        .collect()
}

/// Renders one instruction into the node for its slot.
pub fn render_instruction(
    instruction: &ContentInstruction,
    ctx: &mut Context,
    path: &InstructionPath,
) -> Result<DocumentNode, RenderError> {
    match instruction {
        ContentInstruction::Heading { level, text, id } => {
            let (text, anchor) = split_explicit_anchor(text);
            let id = ctx.register_heading(level.depth(), text, id.as_deref().or(anchor));
            let props = props([("id", PropValue::from(id))]);
            ctx.invoke(level.slot(), props, vec![DocumentNode::text(text)], path)
        }
        ContentInstruction::Paragraph { content } => {
            let children = render_inlines(content, ctx, path)?;
            ctx.invoke(Slot::Paragraph, Props::new(), children, path)
        }
        ContentInstruction::Blockquote { children } => {
            let children = render_sequence(children, ctx, path)?;
            ctx.invoke(Slot::Blockquote, Props::new(), children, path)
        }
        ContentInstruction::Table { headers, rows } => render_table(headers, rows, ctx, path),
        ContentInstruction::CodeBlock { lang, meta, body } => {
            let mut code_props = Props::new();
            if let Some(lang) = lang {
                code_props.insert("className".to_string(), format!("language-{lang}").into());
            }
            if let Some(meta) = meta {
                code_props.insert("metastring".to_string(), meta.as_str().into());
            }
            let code = ctx.invoke(Slot::Code, code_props, vec![DocumentNode::text(body)], path)?;
            ctx.invoke(Slot::CodeBlock, Props::new(), vec![code], path)
        }
        ContentInstruction::Image {
            alt,
            asset,
            width,
            height,
        } => {
            let mut image_props = props([
                ("alt", PropValue::from(alt.as_str())),
                ("asset", PropValue::from(asset.as_str())),
                ("width", PropValue::from(*width)),
                ("height", PropValue::from(*height)),
            ]);
            if let Some(src) = ctx.resolve_asset(asset) {
                image_props.insert("src".to_string(), src.into());
            }
            ctx.invoke(Slot::Image, image_props, Vec::new(), path)
        }
        ContentInstruction::Callout {
            summary,
            open,
            children,
        } => {
            let summary = DocumentNode::element("summary")
                .with_children(render_inlines(summary, ctx, path)?);
            let mut content = vec![summary];
            content.extend(render_sequence(children, ctx, path)?);

            let mut callout_props = Props::new();
            if *open {
                callout_props.insert("open".to_string(), true.into());
            }
            ctx.invoke(Slot::Callout, callout_props, content, path)
        }
    }
}

/// Renders a table: `table > thead > tr > th` and `tbody > tr > td`.
///
/// Body rows are padded or truncated to the header width; `tbody` is omitted
/// when there are no body rows.
fn render_table(
    headers: &[Cell],
    rows: &[Vec<Cell>],
    ctx: &mut Context,
    path: &InstructionPath,
) -> Result<DocumentNode, RenderError> {
    let width = headers.len();

    let header_cells = headers
        .iter()
        .map(|cell| render_cell(Slot::TableHeader, cell, ctx, path))
        .collect::<Result<Vec<_>, _>>()?;
    let header_row = ctx.invoke(Slot::TableRow, Props::new(), header_cells, path)?;
    let mut sections = vec![ctx.invoke(Slot::TableHead, Props::new(), vec![header_row], path)?];

    if !rows.is_empty() {
        let empty = Cell::new();
        let mut body_rows = Vec::with_capacity(rows.len());
        for row in rows {
            let cells = (0..width)
                .map(|column| {
                    let cell = row.get(column).unwrap_or(&empty);
                    render_cell(Slot::TableCell, cell, ctx, path)
                })
                .collect::<Result<Vec<_>, _>>()?;
            body_rows.push(ctx.invoke(Slot::TableRow, Props::new(), cells, path)?);
        }
        sections.push(ctx.invoke(Slot::TableBody, Props::new(), body_rows, path)?);
    }

    ctx.invoke(Slot::Table, Props::new(), sections, path)
}

fn render_cell(
    slot: Slot,
    cell: &[Inline],
    ctx: &mut Context,
    path: &InstructionPath,
) -> Result<DocumentNode, RenderError> {
    let children = render_inlines(cell, ctx, path)?;
    ctx.invoke(slot, Props::new(), children, path)
}

/// Renders phrasing content.
pub fn render_inlines(
    inlines: &[Inline],
    ctx: &mut Context,
    path: &InstructionPath,
) -> Result<Vec<DocumentNode>, RenderError> {
    inlines
        .iter()
        .map(|inline| render_inline(inline, ctx, path))
        .collect()
}

fn render_inline(
    inline: &Inline,
    ctx: &mut Context,
    path: &InstructionPath,
) -> Result<DocumentNode, RenderError> {
    match inline {
        Inline::Text { value } => Ok(DocumentNode::text(value)),
        Inline::Code { value } => ctx.invoke(
            Slot::InlineCode,
            Props::new(),
            vec![DocumentNode::text(value)],
            path,
        ),
        Inline::Strong { children } => {
            let children = render_inlines(children, ctx, path)?;
            ctx.invoke(Slot::Strong, Props::new(), children, path)
        }
        Inline::Emphasis { children } => {
            let children = render_inlines(children, ctx, path)?;
            ctx.invoke(Slot::Emphasis, Props::new(), children, path)
        }
        Inline::Link { href, children } => {
            let children = render_inlines(children, ctx, path)?;
            let props = props([("href", PropValue::from(href.as_str()))]);
            ctx.invoke(Slot::Link, props, children, path)
        }
    }
}

fn props<const N: usize>(entries: [(&str, PropValue); N]) -> Props {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
