//! Template lookup for simulated generation.
//!
//! Pure string substitution: deterministic, no I/O, always returns a document.

mod category_docs;
mod products;

pub use category_docs::category_body;
pub use products::{product_document, ProductKind};

use crate::category::Category;

/// Markdown document for a category key.
///
/// Recognised keys get a titled document that names the category; anything else gets the
/// custom-content fallback.
pub fn category_document(key: &str, prompt: Option<&str>, context: Option<&str>) -> String {
    let prompt = prompt.map(str::trim).unwrap_or_default();
    let context = context.map(str::trim).filter(|c| !c.is_empty());

    let Some(category) = Category::from_key(key) else {
        return fallback_document(key.trim(), prompt, context.unwrap_or_default());
    };

    let mut doc = format!(
        "# {}\n\n_Category: {}_\n\n",
        category.title(),
        category.key()
    );
    if !prompt.is_empty() {
        doc.push_str(&format!("**Request:** {}\n\n", prompt));
    }
    if let Some(ctx) = context {
        doc.push_str(&format!("**Context:** {}\n\n", ctx));
    }
    doc.push_str(&category_body(category.key(), prompt));
    doc
}

/// Generic document returned for unknown categories and product types.
pub fn fallback_document(kind: &str, description: &str, audience: &str) -> String {
    format!(
        "# Custom Content Product

## Product Type: {kind}
## Target Audience: {audience}
## Description: {description}

## Overview
This custom content product has been tailored to meet your specific requirements and target audience needs.

## Key Features
- **Customized Content**: Specifically designed for your use case
- **Professional Quality**: High standards of writing and presentation
- **Practical Value**: Immediate actionable insights and information
- **Flexible Format**: Adaptable to your preferred delivery method

## Content Structure
1. **Introduction**: Context and background information
2. **Main Content**: Core material and key information
3. **Practical Applications**: Real-world usage examples
4. **Conclusion**: Summary and next steps

## Delivery Options
- Digital download (PDF, Word, etc.)
- Web-based access
- Physical delivery (print materials)
- Custom integration (API, embed codes)

## Support and Resources
- Implementation guide
- FAQ and troubleshooting
- Contact information for support
- Update and revision policy",
        kind = kind,
        audience = audience,
        description = description,
    )
}
