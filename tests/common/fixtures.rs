use serde_json::{Value, json};

/// A string of exactly `len` characters.
pub fn text(len: usize) -> String {
    "contenido generado para la diapositiva ".chars().cycle().take(len).collect()
}

pub fn bullets(count: usize, len: usize) -> Value {
    json!({ "type": "bullet_group", "items": (0..count).map(|_| text(len)).collect::<Vec<_>>() })
}

/// Title, no subtitle, three short bullets.
pub fn kubernetes_intro() -> Value {
    json!({
        "title": "Introducción a Kubernetes",
        "blocks": [
            {
                "type": "bullet_group",
                "items": ["Contenedores", "Pods y nodos", "Servicios y redes"]
            }
        ]
    })
}

/// 93-character title, short subtitle, fifteen bullets.
pub fn long_title_with_subtitle() -> Value {
    json!({
        "title": text(93),
        "subtitle": "Costo Total",
        "blocks": [ bullets(15, 25) ]
    })
}

/// Title, subtitle and twenty bullets that each wrap.
pub fn overflowing_bullets() -> Value {
    json!({
        "title": "Migración a la nube",
        "subtitle": "Plan detallado",
        "blocks": [ bullets(20, 48) ]
    })
}

pub fn empty_slide() -> Value {
    json!({ "title": "Preguntas", "blocks": [] })
}

pub fn deck(slides: Vec<Value>) -> String {
    json!({ "slides": slides }).to_string()
}
