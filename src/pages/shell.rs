//! The HTML document shared by every page: head, navbar, main, footer.

use crate::config::SiteConfig;
use crate::layout::{
    join_classes, section_classes, stack_classes, Breakpoint, ClassTables, Direction, Gap,
    ResponsiveValue, SectionProps, StackProps,
};
use crate::security::nonce::Nonce;
use crate::seo::metadata::PageMetadata;
use crate::utils::escape_html;
use std::fmt::Write;

/// Applies the stored or system colour scheme before first paint.
const THEME_SCRIPT: &str = "(function(){try{var t=localStorage.getItem('theme')||'system';\
var d=t==='system'?(window.matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light'):t;\
var e=document.documentElement;e.classList.add(d);e.style.colorScheme=d;}catch(_){}})();";

const REDUCED_MOTION_STYLE: &str = "@media (prefers-reduced-motion: reduce){\
*,*::before,*::after{animation-duration:0s!important;transition-duration:0s!important;}}";

pub struct Shell<'a> {
    pub config: &'a SiteConfig,
    pub metadata: &'a PageMetadata,
    /// Request path, used to mark the active navigation link.
    pub path: &'a str,
    pub nonce: Option<&'a Nonce>,
    pub year: i32,
    pub body: String,
}

fn nonce_attr(nonce: Option<&Nonce>) -> String {
    nonce
        .map(|n| format!(r#" nonce="{}""#, escape_html(n.as_str())))
        .unwrap_or_default()
}

pub fn render_document(shell: &Shell<'_>, tables: &ClassTables) -> String {
    let nonce = nonce_attr(shell.nonce);
    let mut html = String::with_capacity(4096 + shell.body.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&shell.metadata.to_html(shell.config.name()));
    let _ = writeln!(html, "<script{}>{}</script>", nonce, THEME_SCRIPT);
    let _ = writeln!(html, "<style{}>{}</style>", nonce, REDUCED_MOTION_STYLE);
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/app.css\">\n</head>\n");
    html.push_str("<body class=\"bg-background font-sans text-copy-16 antialiased\">\n");

    html.push_str(&render_navbar(shell));
    let _ = writeln!(
        html,
        "<main class=\"flex-1 container pt-16 min-h-dvh\">\n{}\n</main>",
        shell.body
    );
    html.push_str(&render_footer(shell, tables));

    html.push_str("</body>\n</html>\n");
    html
}

fn render_navbar(shell: &Shell<'_>) -> String {
    let home_active = if shell.path == "/" {
        " underline decoration-primary decoration-[0.2rem]"
    } else {
        ""
    };

    let mut html = String::from(
        "<header class=\"fixed top-0 left-0 right-0 z-50 border-b border-border bg-background\">\n\
<div class=\"flex justify-between container items-center\">\n",
    );
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"hover:cursor-pointer hover:text-muted-foreground\"><span class=\"text-heading-20{}\">{}</span></a>",
        home_active,
        escape_html(shell.config.name())
    );

    html.push_str("<nav class=\"hidden md:block\"><ul class=\"flex space-x-6 text-button-14\">\n");
    for link in shell.config.main_nav() {
        let class = if shell.path == link.href {
            "underline decoration-primary"
        } else {
            "hover:text-muted-foreground"
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\" class=\"{}\">{}</a></li>",
            escape_html(&link.href),
            class,
            escape_html(&link.title)
        );
    }
    html.push_str("</ul></nav>\n</div>\n</header>\n");
    html
}

fn render_footer(shell: &Shell<'_>, tables: &ClassTables) -> String {
    let outer = StackProps::new()
        .direction(ResponsiveValue::per_breakpoint([
            (Breakpoint::Sm, Direction::Column),
            (Breakpoint::Md, Direction::Row),
        ]))
        .gap(Gap(4))
        .class_name("items-center md:justify-between container");
    let links = StackProps::new()
        .direction(Direction::Row)
        .gap(Gap(4));

    let mut link_html = String::new();
    for link in shell.config.policy_links() {
        let _ = write!(
            link_html,
            "<a href=\"{}\" class=\"text-copy-14 hover:underline\">{}</a>",
            escape_html(&link.href),
            escape_html(&link.title)
        );
    }

    let copyright = format!(
        "<p class=\"text-copy-14\">{} &copy; {}. All rights reserved.</p>",
        escape_html(shell.config.name()),
        shell.year
    );

    format!(
        "<footer class=\"min-h-16 py-6 md:py-0 flex items-center border-t border-border\">\n{}\n</footer>\n",
        render_stack(&outer, tables, &(copyright + &render_stack(&links, tables, &link_html)))
    )
}

pub fn render_stack(props: &StackProps, tables: &ClassTables, inner: &str) -> String {
    format!(
        "<div class=\"{}\">{}</div>",
        join_classes(stack_classes(props, tables)),
        inner
    )
}

pub fn render_section(props: &SectionProps, tables: &ClassTables, inner: &str) -> String {
    let classes = section_classes(props, tables);
    let section = format!(
        "<section id=\"{}\" class=\"{}\">\n<div class=\"{}\">\n{}\n</div>\n</section>",
        escape_html(&props.id),
        join_classes(&classes.section),
        join_classes(&classes.container),
        inner
    );

    match classes.wrapper {
        Some(wrapper) => format!("<div class=\"{}\">{}</div>", join_classes(&wrapper), section),
        None => section,
    }
}
