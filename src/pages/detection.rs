//! Detection Page
//!
//! Brain-scan upload and analysis. The scan goes to the backend as multipart
//! form data; without a backend a simulated verdict is substituted and
//! labelled. A PDF report can be generated from any result, and a stroke
//! verdict additionally surfaces emergency actions and nearby hospitals.

use leptos::*;
use rand::thread_rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::File;

use crate::api;
use crate::api::types::{DetectionResult, ReportRequest, RiskLevel};
use crate::components::{DemoBanner, HospitalList};
use crate::demo::{self, detection as demo_detection, Fetched};
use crate::state::global::GlobalState;

const REPORT_ADVICE: &str = "Regular monitoring and lifestyle modifications recommended. Consult with a neurologist for detailed assessment.";

#[component]
pub fn Detection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (file, set_file) = create_signal(Option::<File>::None);
    let (preview, set_preview) = create_signal(Option::<String>::None);
    let (result, set_result) = create_signal(Option::<Fetched<DetectionResult>>::None);
    let (analyzing, set_analyzing) = create_signal(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(selected) = input.files().and_then(|list| list.get(0)) else {
            return;
        };

        set_result.set(None);
        set_file.set(Some(selected.clone()));

        // Data-URL preview of the chosen image
        if let Ok(reader) = web_sys::FileReader::new() {
            let reader_for_load = reader.clone();
            let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_| {
                if let Ok(content) = reader_for_load.result() {
                    if let Some(url) = content.as_string() {
                        set_preview.set(Some(url));
                    }
                }
            });
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            let _ = reader.read_as_data_url(&selected);
        }
    };

    let state_for_analyze = state.clone();
    let analyze = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(scan) = file.get_untracked() else {
            state_for_analyze.show_error("Please select an image file");
            return;
        };
        if analyzing.get_untracked() {
            return;
        }
        let state = state_for_analyze.clone();
        set_analyzing.set(true);

        spawn_local(async move {
            let outcome = demo::fetch_or_simulate(
                || async move { api::client::detect_stroke(&scan).await },
                || demo_detection::simulate_detection(&mut thread_rng()),
            )
            .await;

            match outcome {
                Ok(fetched) => set_result.set(Some(fetched)),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_analyzing.set(false);
        });
    };

    view! {
        <div class="container mx-auto px-4 py-12 max-w-5xl">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold mb-4">
                    "AI " <span class="text-blue-600">"Stroke Detection"</span>
                </h1>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                    "Upload your brain MRI or CT scan for instant AI-powered analysis using advanced CNN deep learning"
                </p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                // Upload column
                <div class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-2xl font-bold mb-6">"🧠 Upload Brain Scan"</h2>

                    <form on:submit=analyze class="space-y-6">
                        <div class="border-2 border-dashed border-gray-300 rounded-xl p-8 text-center hover:border-blue-500 transition-colors">
                            <input
                                type="file"
                                id="scan-upload"
                                accept="image/*"
                                class="hidden"
                                on:change=on_file_change
                            />
                            <label for="scan-upload" class="cursor-pointer block">
                                <div class="text-5xl mb-4">"📤"</div>
                                <p class="text-lg font-medium text-gray-700 mb-2">"Click to upload"</p>
                                <p class="text-sm text-gray-500">"MRI or CT scan images (JPG, PNG)"</p>
                            </label>
                        </div>

                        {move || {
                            preview.get().map(|url| view! {
                                <div>
                                    <img src=url alt="Scan preview" class="w-full rounded-lg shadow" />
                                    <p class="text-sm text-gray-600 mt-2">
                                        {move || file.get().map(|f| format!("Selected: {}", f.name()))}
                                    </p>
                                </div>
                            })
                        }}

                        <button
                            type="submit"
                            class="w-full px-6 py-3 bg-blue-600 text-white rounded-lg font-semibold text-lg hover:bg-blue-700 disabled:opacity-50 transition-colors"
                            disabled=move || file.get().is_none() || analyzing.get()
                        >
                            {move || if analyzing.get() { "Analyzing..." } else { "Analyze Scan" }}
                        </button>
                    </form>

                    <div class="mt-6 bg-blue-50 border border-blue-200 rounded-lg p-4">
                        <h3 class="font-semibold text-blue-900 mb-2">"ℹ️ Important Notes:"</h3>
                        <ul class="text-sm text-blue-800 space-y-1">
                            <li>"• Upload clear, high-quality brain scan images"</li>
                            <li>"• Analysis takes 2-5 seconds"</li>
                            <li>"• Your images are NOT stored on our servers"</li>
                            <li>"• This tool is for educational purposes only"</li>
                            <li>"• Consult healthcare professionals for diagnosis"</li>
                        </ul>
                    </div>
                </div>

                // Results column
                <div>
                    {move || {
                        if analyzing.get() {
                            view! {
                                <div class="bg-white rounded-xl shadow p-6 flex flex-col items-center justify-center h-full py-20">
                                    <div class="loading-spinner w-10 h-10 mb-4" />
                                    <p class="text-lg text-gray-600">"Analyzing brain scan..."</p>
                                    <p class="text-sm text-gray-500 mt-2">"This may take a few seconds"</p>
                                </div>
                            }.into_view()
                        } else if let Some(fetched) = result.get() {
                            let simulated = fetched.is_simulated();
                            let verdict = fetched.into_value();
                            view! {
                                <ResultPanel verdict=verdict simulated=simulated file=file />
                            }.into_view()
                        } else {
                            view! {
                                <div class="bg-white rounded-xl shadow p-6 flex flex-col items-center justify-center h-full text-center py-20">
                                    <div class="text-6xl mb-6">"🧠"</div>
                                    <h3 class="text-2xl font-bold text-gray-700 mb-2">"No Results Yet"</h3>
                                    <p class="text-gray-500">"Upload a brain scan image to get started"</p>
                                </div>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResultPanel(
    verdict: DetectionResult,
    simulated: bool,
    file: ReadSignal<Option<File>>,
) -> impl IntoView {
    let stroke = verdict.stroke_detected;
    let (card_class, icon, heading_class) = if stroke {
        ("bg-red-50 border-2 border-red-200 rounded-xl p-6", "🚨", "text-red-900")
    } else {
        ("bg-green-50 border-2 border-green-200 rounded-xl p-6", "✅", "text-green-900")
    };
    let risk_badge = match verdict.risk_level {
        RiskLevel::High => "bg-red-200 text-red-900",
        RiskLevel::Medium => "bg-yellow-200 text-yellow-900",
        RiskLevel::Low => "bg-green-200 text-green-900",
    };

    view! {
        <div class="space-y-6">
            {simulated.then(|| view! { <DemoBanner /> })}

            // Verdict card
            <div class=card_class>
                <div class="flex items-start space-x-4">
                    <div class="text-4xl">{icon}</div>
                    <div class="flex-1">
                        <h3 class=format!("text-2xl font-bold mb-2 {}", heading_class)>
                            {verdict.prediction.clone()}
                        </h3>
                        <p class="text-lg font-semibold mb-3">
                            {format!("Confidence: {:.2}%", verdict.confidence)}
                        </p>
                        {verdict.stroke_type.clone().map(|kind| view! {
                            <p class="text-sm mb-3">
                                <span class="text-gray-600">"Classification: "</span>
                                <span class="font-semibold text-gray-900">{kind}</span>
                            </p>
                        })}
                        <span class=format!("inline-block px-4 py-2 rounded-full text-sm font-semibold {}", risk_badge)>
                            {format!("Risk Level: {}", verdict.risk_level.label())}
                        </span>
                    </div>
                </div>
            </div>

            // Attention heatmap, when the backend produced one
            {verdict.gradcam_image.clone().map(|encoded| view! {
                <div class="bg-purple-50 border-2 border-purple-200 rounded-xl p-6">
                    <h3 class="text-xl font-bold text-purple-900 mb-4">"🔬 Explainable AI (Grad-CAM)"</h3>
                    <p class="text-gray-700 mb-4">
                        "This heatmap shows which brain regions influenced the model's decision. \
                         Red and yellow areas carried the most weight."
                    </p>
                    <img
                        src=format!("data:image/png;base64,{}", encoded)
                        alt="Grad-CAM heatmap"
                        class="w-full rounded-lg shadow"
                    />
                </div>
            })}

            <ReportDownload verdict=verdict.clone() file=file />

            // Recommendations
            <div class="bg-white rounded-xl shadow p-6">
                <h3 class="text-xl font-bold mb-4">"📋 Recommendations"</h3>
                <ul class="space-y-3">
                    {verdict.recommendations.iter().map(|rec| view! {
                        <li class="flex items-start space-x-3">
                            <span class="text-blue-600 font-bold">"•"</span>
                            <span class="text-gray-700">{rec.clone()}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>

            // Emergency + hospitals, only for a stroke verdict
            {stroke.then(|| view! {
                <div class="space-y-6">
                    <div class="bg-gradient-to-r from-red-500 to-pink-500 text-white rounded-xl p-6">
                        <h3 class="text-2xl font-bold mb-2">"🚨 Immediate Action Required"</h3>
                        <p class="mb-4">"If you are experiencing symptoms, seek medical attention immediately!"</p>
                        <div class="grid grid-cols-2 gap-4">
                            <a href="tel:108" class="px-4 py-3 bg-white text-red-600 rounded-lg font-semibold text-center hover:bg-gray-100">
                                "📞 Call 108"
                            </a>
                            <a href="tel:112" class="px-4 py-3 bg-white text-red-600 rounded-lg font-semibold text-center hover:bg-gray-100">
                                "📞 Call 112"
                            </a>
                        </div>
                    </div>

                    <HospitalList />
                </div>
            })}
        </div>
    }
}

/// PDF report form. Requires a patient name; failures are retryable and
/// never substituted with fake output.
#[component]
fn ReportDownload(
    verdict: DetectionResult,
    file: ReadSignal<Option<File>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (patient_name, set_patient_name) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);

    let download = move |_| {
        let name = patient_name.get_untracked().trim().to_string();
        if name.is_empty() {
            state.show_error("Please enter your name to generate the report");
            return;
        }
        if generating.get_untracked() {
            return;
        }

        let request = ReportRequest {
            patient_name: name.clone(),
            image_name: file
                .get_untracked()
                .map(|f| f.name())
                .unwrap_or_else(|| "brain_scan.jpg".to_string()),
            prediction: verdict.prediction.clone(),
            confidence: verdict.confidence,
            stroke_detected: verdict.stroke_detected,
            risk_level: verdict.risk_level,
            stroke_type: verdict.stroke_type.clone(),
            recommendations: verdict.recommendations.clone(),
            chatbot_advice: REPORT_ADVICE.to_string(),
            gradcam_base64: verdict.gradcam_image.clone(),
        };
        let state = state.clone();
        set_generating.set(true);

        spawn_local(async move {
            match api::client::generate_report(&request).await {
                Ok(bytes) => {
                    let filename = format!("BrainHealth_Report_{}.pdf", name.replace(' ', "_"));
                    if let Err(e) = trigger_download(&bytes, &filename) {
                        web_sys::console::error_1(&e);
                        state.show_error("Error generating PDF report. Please try again.");
                    } else {
                        state.show_success("Report downloaded");
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("report generation failed: {}", e).into());
                    state.show_error("Error generating PDF report. Please try again.");
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="bg-gradient-to-r from-blue-500 to-indigo-600 text-white rounded-xl p-6">
            <h3 class="text-2xl font-bold mb-2">"📄 Download Medical Report"</h3>
            <p class="mb-4 opacity-90">
                "Generate a comprehensive PDF report with all analysis results and medical recommendations."
            </p>
            <div class="space-y-3">
                <input
                    type="text"
                    placeholder="Enter your name for the report"
                    class="w-full px-4 py-3 rounded-lg text-gray-900 focus:outline-none"
                    prop:value=move || patient_name.get()
                    on:input=move |ev| set_patient_name.set(event_target_value(&ev))
                />
                <button
                    class="w-full px-4 py-3 bg-white text-blue-600 rounded-lg font-semibold hover:bg-gray-100 disabled:opacity-50 transition-colors"
                    disabled=move || generating.get() || patient_name.get().trim().is_empty()
                    on:click=download
                >
                    {move || if generating.get() { "Generating PDF..." } else { "Download Medical Report (PDF)" }}
                </button>
            </div>
        </div>
    }
}

/// Hand the bytes to the browser as a file download.
fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), wasm_bindgen::JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&array))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &url)?;
    anchor.set_attribute("download", filename)?;
    anchor
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("not an element"))?
        .click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
