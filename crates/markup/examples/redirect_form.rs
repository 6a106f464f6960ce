//! Redirect form example - a page that posts hidden fields to a gateway on load

use markup::{Document, Node, SerializerConfig};

fn hidden(name: &str, value: &str) -> Node {
    Node::element("input")
        .with_attr("type", "hidden")
        .with_attr("name", name)
        .with_attr("value", value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = SerializerConfig::from_json(r#"{ "htmlTagAttributes": { "lang": "en" } }"#)?;

    let fields = [
        ("orderId", "1042"),
        ("amount", "25.00"),
        ("currency", "EUR"),
        // Signing happens elsewhere; the page only carries the result
        ("signature", "precomputed-signature"),
    ];

    let mut form = Node::element("form")
        .with_attr("id", "redirect")
        .with_attr("method", "post")
        .with_attr("action", "https://gateway.example/pay")
        .with_attr("acceptCharset", "utf-8");
    for (name, value) in fields {
        form.append_child(hidden(name, value));
    }

    let mut doc = Document::new();
    doc.append(form).scaffold().set_title("Redirecting...");
    doc.append_to_type(
        "body",
        Node::element("script").with_text("\n  document.getElementById('redirect').submit();\n"),
    );

    println!("{}", doc.serialize(&config));

    Ok(())
}
