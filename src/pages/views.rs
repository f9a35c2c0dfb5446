//! Page bodies rendered inside the shell.

use crate::config::SiteConfig;
use crate::content::legal::{format_date, LegalDocument};
use crate::layout::{
    grid_classes, join_classes, Breakpoint, ClassTables, Columns, Direction, Gap, GridProps,
    ResponsiveValue, SectionProps, StackProps,
};
use crate::pages::shell::{render_section, render_stack};
use crate::utils::escape_html;
use std::fmt::Write;

pub const LEGAL_HEADING: &str = "Legal";
pub const LEGAL_DESCRIPTION: &str = "This section includes legal documents for the app.";
pub const NO_LEGAL_DOCUMENTS: &str = "No legal documents published.";

fn page_header(tables: &ClassTables, heading: &str, text: Option<&str>) -> String {
    let mut inner = format!(
        "<h1 class=\"text-heading-48\">{}</h1>",
        escape_html(heading)
    );
    if let Some(text) = text {
        let _ = write!(
            inner,
            "<p class=\"text-copy-18 text-muted-foreground\">{}</p>",
            escape_html(text)
        );
    }
    render_stack(&StackProps::new().gap(Gap(2)), tables, &inner)
}

fn hero(tables: &ClassTables, heading: &str, text: Option<&str>) -> String {
    let props = SectionProps::new("hero")
        .gap(Gap(8))
        .full_width()
        .hero()
        .class_name("bg-card");
    render_section(&props, tables, &page_header(tables, heading, text))
}

pub fn home(tables: &ClassTables, config: &SiteConfig) -> String {
    let features = [
        ("Secure by default", "Every page ships with a per-request nonce and a strict policy."),
        ("Responsive layout", "Stack, Section and Grid primitives compose mobile-first classes."),
        ("Search ready", "robots.txt, sitemap.xml and OpenGraph tags are generated for you."),
    ];

    let mut cards = String::new();
    for (title, copy) in features {
        let inner = format!(
            "<h2 class=\"text-heading-24\">{}</h2><p class=\"text-muted-foreground\">{}</p>",
            escape_html(title),
            escape_html(copy)
        );
        let _ = write!(
            cards,
            "<div class=\"rounded-lg border p-6\">{}</div>",
            render_stack(&StackProps::new().gap(Gap(2)), tables, &inner)
        );
    }

    let grid = GridProps::new()
        .columns(ResponsiveValue::per_breakpoint([
            (Breakpoint::Sm, Columns(1)),
            (Breakpoint::Md, Columns(3)),
        ]))
        .gap(Gap(4));

    let content = format!(
        "<div class=\"{}\">{}</div>",
        join_classes(grid_classes(&grid, tables)),
        cards
    );

    let links = config.links();
    let actions = render_stack(
        &StackProps::new().direction(Direction::Row).gap(Gap(4)),
        tables,
        &format!(
            "<a href=\"{}\" class=\"border rounded-md px-4 py-2\">GitHub</a>\
<a href=\"{}\" class=\"border rounded-md px-4 py-2\">Docs</a>",
            escape_html(&links.github),
            escape_html(&links.docs)
        ),
    );

    hero(
        tables,
        config.name(),
        Some("A starter template for marketing sites."),
    ) + &render_section(&SectionProps::new("actions"), tables, &actions)
        + &render_section(&SectionProps::new("features").gap(Gap(8)), tables, &content)
}

pub fn legal_index(tables: &ClassTables, documents: &[&LegalDocument]) -> String {
    let content = if documents.is_empty() {
        format!("<p class=\"text-muted-foreground\">{}</p>", NO_LEGAL_DOCUMENTS)
    } else {
        let mut cards = String::new();
        for doc in documents {
            let mut text = format!(
                "<h2 class=\"text-heading-24\">{}</h2>",
                escape_html(&doc.page_title)
            );
            if let Some(description) = &doc.page_description {
                let _ = write!(
                    text,
                    "<p class=\"text-muted-foreground\">{}</p>",
                    escape_html(description)
                );
            }
            let inner = render_stack(&StackProps::new().gap(Gap(2)), tables, &text)
                + &format!(
                    "<p class=\"text-copy-14 text-muted-foreground\">{}</p>",
                    format_date(&doc.date)
                );
            let _ = write!(
                cards,
                "<a href=\"{}\" class=\"group relative rounded-lg border p-6 shadow-md transition-shadow hover:shadow-lg\">{}</a>",
                escape_html(&doc.slug),
                render_stack(&StackProps::new().gap(Gap(4)), tables, &inner)
            );
        }

        let grid = GridProps::new()
            .columns(ResponsiveValue::per_breakpoint([
                (Breakpoint::Sm, Columns(1)),
                (Breakpoint::Md, Columns(2)),
            ]))
            .gap(Gap(4));
        format!(
            "<div class=\"{}\">{}</div>",
            join_classes(grid_classes(&grid, tables)),
            cards
        )
    };

    hero(tables, LEGAL_HEADING, Some(LEGAL_DESCRIPTION))
        + &render_section(&SectionProps::new("content").gap(Gap(8)), tables, &content)
}

/// The body HTML is trusted output of the content pipeline; the raw source
/// is escaped when no HTML was produced.
pub fn legal_document(tables: &ClassTables, doc: &LegalDocument) -> String {
    let body = if doc.body.html.is_empty() {
        format!("<pre class=\"whitespace-pre-wrap\">{}</pre>", escape_html(&doc.body.raw))
    } else {
        doc.body.html.clone()
    };

    let content = format!(
        "<article class=\"mdx\">{}</article>\n<a href=\"/legal\" class=\"w-fit mx-auto\">See all legal docs</a>",
        body
    );

    hero(tables, &doc.page_title, doc.page_description.as_deref())
        + &render_section(&SectionProps::new("content").gap(Gap(8)), tables, &content)
}

pub fn not_found(tables: &ClassTables) -> String {
    let message = render_stack(
        &StackProps::new().gap(Gap(2)).class_name("items-center justify-center"),
        tables,
        "<h1 class=\"text-heading-56\">404</h1>\
<p class=\"max-w-[400px] text-center\">You would&apos;ve gotten away with it, if it weren&apos;t for those meddling kids, and their nosy dog.</p>",
    );
    let inner = render_stack(
        &StackProps::new()
            .gap(Gap(8))
            .class_name("items-center justify-center h-dvh"),
        tables,
        &(message + "<a href=\"/\" class=\"border rounded-md px-4 py-2\">Go to Home</a>"),
    );

    render_section(
        &SectionProps::new("not-found").class_name("flex flex-col py-0 -mt-16"),
        tables,
        &inner,
    )
}
