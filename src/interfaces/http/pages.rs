use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use maud::{html, Markup};
use serde_json::json;

use super::AppState;
use crate::application::use_cases::processing_flow::ProcessingPage;
use crate::application::use_cases::robots::{sitemap_locations, RobotsPolicy};
use crate::domain::markup::strip_markers;
use crate::domain::processing::{ProcessingFlow, ProductType};
use crate::domain::theme::THEME;
use crate::interfaces::ui::button::{button, ButtonProps, ButtonSize, ButtonVariant};
use crate::interfaces::ui::deep_summary::{deep_summary, DeepSummaryProps};
use crate::interfaces::ui::glass_card::{glass_card, GlassCardProps};
use crate::interfaces::ui::layout::{page, PageProps};
use crate::interfaces::ui::linear_scale::{linear_scale, LinearScaleProps};
use crate::interfaces::ui::logo::{logo, LogoProps, LogoSize};
use crate::interfaces::ui::processing_view::{processing_view, redirect_meta, ProcessingViewProps};
use crate::interfaces::ui::progress_bar::{progress_bar, ProgressBarProps};
use crate::interfaces::ui::radio_card::{radio_card, RadioCardProps};
use crate::interfaces::ui::sitemap::sitemap as sitemap_markup;

const ADMIN_EVENT_LIMIT: usize = 50;

struct ChoiceQuestion {
    name: &'static str,
    prompt: &'static str,
    options: &'static [(&'static str, &'static str, Option<&'static str>)],
}

const CHOICE_QUESTIONS: &[ChoiceQuestion] = &[
    ChoiceQuestion {
        name: "tiempo",
        prompt: "¿Cuánto tiempo hace que terminó la relación?",
        options: &[
            ("menos-1-mes", "Menos de un mes", None),
            ("1-6-meses", "Entre 1 y 6 meses", None),
            ("mas-6-meses", "Más de 6 meses", Some("Aún hay margen para reconectar")),
        ],
    },
    ChoiceQuestion {
        name: "contacto",
        prompt: "¿Seguís en contacto?",
        options: &[
            ("frecuente", "Sí, hablamos a menudo", None),
            ("ocasional", "De vez en cuando", None),
            ("ninguno", "No, nada", Some("El contacto cero también cuenta")),
        ],
    },
];

const QUICK_SUMMARY: &str = "Según tus respuestas, vuestra historia tiene **potencial de reconciliación**, \
pero hay **patrones que conviene revisar** antes de dar el siguiente paso.";

const DEEP_SUMMARY: &str = "Tu análisis profundo muestra un **vínculo emocional todavía activo**. \
Las señales de contacto y el tiempo transcurrido apuntan a una **ventana de oportunidad real**.\n\n\
El principal riesgo es **repetir la dinámica que provocó la ruptura**. \
Trabajar primero la comunicación aumenta tus posibilidades.";

#[get("/")]
async fn home() -> Markup {
    page(
        PageProps {
            title: "Inicio".to_string(),
            description: Some(
                "Descubre en 2 minutos si tu relación tiene una segunda oportunidad.".to_string(),
            ),
            ..Default::default()
        },
        html! {},
        glass_card(
            GlassCardProps::default(),
            html! {
                (logo(LogoProps {
                    size: LogoSize::Lg,
                    href: None,
                }))
                p { "Descubre en 2 minutos si tu relación tiene una segunda oportunidad." }
                (button(ButtonProps {
                    href: Some("/checklist".to_string()),
                    size: ButtonSize::Lg,
                    full_width: true,
                    ..ButtonProps::new("Empezar el test")
                }))
            },
        ),
    )
}

#[get("/checklist")]
async fn checklist() -> Markup {
    page(
        PageProps {
            title: "Test".to_string(),
            ..Default::default()
        },
        html! {},
        html! {
            form method="get" action="/checklist/analyzing" {
                @for question in CHOICE_QUESTIONS {
                    fieldset {
                        legend { (question.prompt) }
                        @for (value, label, description) in question.options {
                            (radio_card(RadioCardProps {
                                name: question.name.to_string(),
                                value: value.to_string(),
                                label: label.to_string(),
                                description: description.map(str::to_string),
                                checked: false,
                                required: true,
                            }))
                        }
                    }
                }
                fieldset {
                    legend { "Del 1 al 5, ¿cuánto crees que aún te quiere?" }
                    (linear_scale(LinearScaleProps {
                        name: "confianza".to_string(),
                        min_caption: Some("Nada".to_string()),
                        max_caption: Some("Muchísimo".to_string()),
                        ..Default::default()
                    }))
                }
                input type="hidden" name="product" value=(ProductType::Quick.as_str());
                (button(ButtonProps {
                    kind: Some("submit"),
                    full_width: true,
                    ..ButtonProps::new("Ver mi resultado")
                }))
            }
        },
    )
}

fn processing_response(
    product: ProductType,
    title: &str,
    req: &HttpRequest,
    state: &AppState,
) -> Markup {
    let flow = ProcessingFlow::for_product(product);
    let mounted = ProcessingPage::mount(&flow, req.query_string(), &state.analytics);

    page(
        PageProps {
            title: title.to_string(),
            noindex: true,
            ..Default::default()
        },
        redirect_meta(&mounted.destination, mounted.duration),
        processing_view(
            &flow,
            ProcessingViewProps {
                title: title.to_string(),
                subtitle: Some("No cierres esta página".to_string()),
            },
        ),
    )
}

#[get("/checklist/analyzing")]
async fn analyzing(req: HttpRequest, data: web::Data<AppState>) -> Markup {
    processing_response(ProductType::Quick, "Analizando tus respuestas", &req, &data)
}

#[get("/processing")]
async fn processing(req: HttpRequest, data: web::Data<AppState>) -> Markup {
    processing_response(ProductType::Deep, "Preparando tu análisis profundo", &req, &data)
}

/// Product named by the first `product` pair of the query. Every other pair is ignored.
fn query_product(raw_query: &str) -> ProductType {
    url::form_urlencoded::parse(raw_query.as_bytes())
        .find(|(key, _)| key == "product")
        .and_then(|(_, value)| ProductType::parse(&value))
        .unwrap_or(ProductType::Quick)
}

/// Same query with `product` replaced, for the upsell link.
fn with_product(raw_query: &str, product: ProductType) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
        if key != "product" {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.append_pair("product", product.as_str());
    serializer.finish()
}

#[get("/pre-result")]
async fn pre_result(req: HttpRequest) -> Markup {
    let (text, cta) = match query_product(req.query_string()) {
        ProductType::Quick => (
            QUICK_SUMMARY,
            button(ButtonProps {
                href: Some(format!(
                    "/processing?{}",
                    with_product(req.query_string(), ProductType::Deep)
                )),
                size: ButtonSize::Lg,
                full_width: true,
                ..ButtonProps::new("Desbloquear el análisis profundo")
            }),
        ),
        ProductType::Deep => (
            DEEP_SUMMARY,
            button(ButtonProps {
                href: Some("/".to_string()),
                variant: ButtonVariant::Secondary,
                full_width: true,
                ..ButtonProps::new("Volver al inicio")
            }),
        ),
    };

    page(
        PageProps {
            title: "Tu resultado".to_string(),
            description: Some(strip_markers(text)),
            noindex: true,
        },
        html! {},
        html! {
            (deep_summary(DeepSummaryProps {
                title: "Tu resultado".to_string(),
                text: text.to_string(),
            }))
            (cta)
        },
    )
}

#[get("/components-check")]
async fn components_check() -> Markup {
    let variants = [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Ghost]
        .into_iter()
        .zip([ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg]);

    page(
        PageProps {
            title: "Components".to_string(),
            noindex: true,
            ..Default::default()
        },
        html! {},
        html! {
            (logo(LogoProps::default()))
            (glass_card(
                GlassCardProps {
                    hoverable: true,
                    extra_class: None,
                },
                html! {
                    @for (variant, size) in variants {
                        (button(ButtonProps {
                            variant,
                            size,
                            ..ButtonProps::new(format!("{:?} {:?}", variant, size))
                        }))
                    }
                },
            ))
            (progress_bar(ProgressBarProps {
                value: 60,
                label: Some("Progreso".to_string()),
                animate_over: None,
            }))
            (radio_card(RadioCardProps {
                name: "demo".to_string(),
                value: "a".to_string(),
                label: "Opción A".to_string(),
                description: Some("Con descripción".to_string()),
                checked: true,
                required: false,
            }))
            (linear_scale(LinearScaleProps {
                name: "demo-scale".to_string(),
                selected: Some(3),
                ..Default::default()
            }))
            (deep_summary(DeepSummaryProps {
                title: "Resumen".to_string(),
                text: "Texto con **negrita** y un ** suelto".to_string(),
            }))
            (processing_view(
                &ProcessingFlow::quick(),
                ProcessingViewProps {
                    title: "Procesando".to_string(),
                    subtitle: None,
                },
            ))
        },
    )
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[get("/theme.css")]
async fn theme_css() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(THEME.stylesheet())
}

#[get("/robots.txt")]
async fn robots_txt(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(RobotsPolicy::for_site(&data.site).render())
}

#[get("/sitemap.xml")]
async fn sitemap(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::xml())
        .body(sitemap_markup(&sitemap_locations(&data.site)).into_string())
}

#[get("/admin")]
async fn admin_dashboard(data: web::Data<AppState>) -> Markup {
    let summary = data.analytics.summary();
    let events = data.analytics.recent_events(ADMIN_EVENT_LIMIT);

    page(
        PageProps {
            title: "Admin".to_string(),
            noindex: true,
            ..Default::default()
        },
        html! {},
        glass_card(
            GlassCardProps::default(),
            html! {
                h1 { "Eventos recientes" }
                p {
                    "Total: " (summary.total_events)
                    " · quick: " (summary.quick_count)
                    " · deep: " (summary.deep_count)
                }
                table {
                    thead {
                        tr {
                            th { "Fecha" }
                            th { "Evento" }
                            th { "Producto" }
                            th { "Montaje" }
                        }
                    }
                    tbody {
                        @for event in &events {
                            tr {
                                td { (event.occurred_at.format("%Y-%m-%d %H:%M:%S").to_string()) }
                                td { (event.name) }
                                td { (event.product_type.as_str()) }
                                td { (event.mount_id.to_string()) }
                            }
                        }
                    }
                }
            },
        ),
    )
}

#[get("/admin/events")]
async fn admin_events(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "summary": data.analytics.summary(),
        "events": data.analytics.recent_events(ADMIN_EVENT_LIMIT),
    }))
}
