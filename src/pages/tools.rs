//! Health Tools Page
//!
//! Three client-side calculators: BMI, blood pressure, and stroke risk.
//! All computation happens locally; nothing is sent anywhere.

use leptos::*;

use crate::health::{blood_pressure, bmi, stroke_risk, BmiCategory, StrokeRiskLevel, MAX_SCORE};

#[component]
pub fn Tools() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-12 max-w-5xl">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold mb-4">
                    "Health " <span class="text-blue-600">"Tools"</span>
                </h1>
                <p class="text-lg text-gray-600">
                    "Interactive calculators for quick health checks. Results are computed on your device."
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <BmiCalculator />
                <BloodPressureChecker />
                <StrokeRiskAssessment />
            </div>
        </div>
    }
}

#[component]
fn BmiCalculator() -> impl IntoView {
    let (height, set_height) = create_signal(String::new());
    let (weight, set_weight) = create_signal(String::new());

    // Invalid or incomplete input shows nothing rather than an error.
    let result = move || {
        let h = height.get().trim().parse::<f64>().ok()?;
        let w = weight.get().trim().parse::<f64>().ok()?;
        bmi(h, w)
    };

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-bold mb-4">"⚖️ BMI Calculator"</h2>

            <div class="space-y-3 mb-4">
                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Height (cm)"</label>
                    <input
                        type="number"
                        placeholder="170"
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-blue-500 focus:outline-none"
                        prop:value=move || height.get()
                        on:input=move |ev| set_height.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Weight (kg)"</label>
                    <input
                        type="number"
                        placeholder="70"
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-blue-500 focus:outline-none"
                        prop:value=move || weight.get()
                        on:input=move |ev| set_weight.set(event_target_value(&ev))
                    />
                </div>
            </div>

            {move || {
                result().map(|r| {
                    let color = match r.category {
                        BmiCategory::Normal => "text-green-600",
                        BmiCategory::Underweight | BmiCategory::Overweight => "text-yellow-600",
                        BmiCategory::Obese => "text-red-600",
                    };
                    view! {
                        <div class="bg-gray-50 rounded-lg p-4 text-center">
                            <div class="text-3xl font-bold">{format!("{:.1}", r.display_value())}</div>
                            <div class=format!("font-semibold {}", color)>{r.category.label()}</div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn BloodPressureChecker() -> impl IntoView {
    let (systolic, set_systolic) = create_signal(String::new());
    let (diastolic, set_diastolic) = create_signal(String::new());

    let result = move || {
        let sys = systolic.get().trim().parse::<i32>().ok()?;
        let dia = diastolic.get().trim().parse::<i32>().ok()?;
        Some(blood_pressure(sys, dia))
    };

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-bold mb-4">"💓 Blood Pressure"</h2>

            <div class="space-y-3 mb-4">
                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Systolic (mmHg)"</label>
                    <input
                        type="number"
                        placeholder="120"
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-blue-500 focus:outline-none"
                        prop:value=move || systolic.get()
                        on:input=move |ev| set_systolic.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Diastolic (mmHg)"</label>
                    <input
                        type="number"
                        placeholder="80"
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-blue-500 focus:outline-none"
                        prop:value=move || diastolic.get()
                        on:input=move |ev| set_diastolic.set(event_target_value(&ev))
                    />
                </div>
            </div>

            {move || {
                result().map(|category| view! {
                    <div class="bg-gray-50 rounded-lg p-4 text-center">
                        <div class="text-xl font-bold">{category.label()}</div>
                    </div>
                })
            }}
        </div>
    }
}

#[component]
fn StrokeRiskAssessment() -> impl IntoView {
    let (age, set_age) = create_signal(String::new());
    let (hypertension, set_hypertension) = create_signal(false);
    let (diabetes, set_diabetes) = create_signal(false);
    let (smoking, set_smoking) = create_signal(false);

    let result = move || {
        let age = age.get().trim().parse::<u32>().ok()?;
        Some(stroke_risk(
            age,
            hypertension.get(),
            diabetes.get(),
            smoking.get(),
        ))
    };

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-bold mb-4">"🧠 Stroke Risk"</h2>

            <div class="space-y-3 mb-4">
                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Age"</label>
                    <input
                        type="number"
                        placeholder="45"
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:border-blue-500 focus:outline-none"
                        prop:value=move || age.get()
                        on:input=move |ev| set_age.set(event_target_value(&ev))
                    />
                </div>

                <label class="flex items-center space-x-2 text-sm">
                    <input
                        type="checkbox"
                        prop:checked=move || hypertension.get()
                        on:change=move |_| set_hypertension.update(|v| *v = !*v)
                    />
                    <span>"High blood pressure"</span>
                </label>
                <label class="flex items-center space-x-2 text-sm">
                    <input
                        type="checkbox"
                        prop:checked=move || diabetes.get()
                        on:change=move |_| set_diabetes.update(|v| *v = !*v)
                    />
                    <span>"Diabetes"</span>
                </label>
                <label class="flex items-center space-x-2 text-sm">
                    <input
                        type="checkbox"
                        prop:checked=move || smoking.get()
                        on:change=move |_| set_smoking.update(|v| *v = !*v)
                    />
                    <span>"Smoking"</span>
                </label>
            </div>

            {move || {
                result().map(|r| {
                    let color = match r.level {
                        StrokeRiskLevel::Low => "text-green-600",
                        StrokeRiskLevel::Moderate => "text-yellow-600",
                        StrokeRiskLevel::High => "text-red-600",
                    };
                    view! {
                        <div class="bg-gray-50 rounded-lg p-4 text-center">
                            <div class="text-3xl font-bold">{format!("{} / {}", r.score, MAX_SCORE)}</div>
                            <div class=format!("font-semibold {}", color)>{r.level.label()}</div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
