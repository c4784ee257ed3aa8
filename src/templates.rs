//! Tera engine with every page template compiled into the binary

use std::collections::HashMap;

use serde_json::Value;
use tera::Tera;

use crate::urls;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    (
        "includes/pagination.html",
        include_str!("../templates/includes/pagination.html"),
    ),
    ("taxi/index.html", include_str!("../templates/taxi/index.html")),
    (
        "taxi/manufacturer_list.html",
        include_str!("../templates/taxi/manufacturer_list.html"),
    ),
    (
        "taxi/manufacturer_form.html",
        include_str!("../templates/taxi/manufacturer_form.html"),
    ),
    (
        "taxi/manufacturer_confirm_delete.html",
        include_str!("../templates/taxi/manufacturer_confirm_delete.html"),
    ),
    (
        "taxi/driver_list.html",
        include_str!("../templates/taxi/driver_list.html"),
    ),
    (
        "registration/login.html",
        include_str!("../templates/registration/login.html"),
    ),
];

pub fn engine() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();

    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    tera.register_function("url", url);

    Ok(tera)
}

/// `{{ url(name="taxi:manufacturer-update", pk=1) }}`
fn url(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = args
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("url() requires a string `name` argument"))?;
    let pk = match args.get("pk") {
        None | Some(Value::Null) => None,
        Some(Value::Number(pk)) => pk.as_i64(),
        Some(Value::String(pk)) => Some(
            pk.parse()
                .map_err(|_| tera::Error::msg(format!("url() got a non-integer pk `{pk}`")))?,
        ),
        Some(other) => return Err(tera::Error::msg(format!("url() got an invalid pk `{other}`"))),
    };

    urls::reverse(name, pk)
        .map(Value::String)
        .map_err(|e| tera::Error::msg(e.to_string()))
}
