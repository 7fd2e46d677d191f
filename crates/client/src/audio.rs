//! Audio utilities for playing notification sounds.
//!
//! On web, plays a bundled chime when available and falls back to a short
//! generated tone through the Web Audio API.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::JsCast;

    /// Play the sound for a newly delivered notification.
    pub fn play_notification() {
        if try_play_audio_file() {
            return;
        }

        play_generated_tone();
    }

    /// Try to play the notification chime from an audio file.
    fn try_play_audio_file() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(document) = window.document() else {
            return false;
        };

        // Reuse an existing audio element or create one
        let audio: web_sys::HtmlAudioElement = match document
            .get_element_by_id("monolite-notification-audio")
            .and_then(|el| el.dyn_into::<web_sys::HtmlAudioElement>().ok())
        {
            Some(existing) => existing,
            None => {
                match web_sys::HtmlAudioElement::new_with_src("/assets/sounds/notification.mp3") {
                    Ok(audio) => {
                        audio.set_id("monolite-notification-audio");
                        audio.set_volume(0.5);
                        audio
                    }
                    Err(_) => return false,
                }
            }
        };

        // network_state 3 = NETWORK_NO_SOURCE
        if audio.network_state() == 3 {
            return false;
        }

        audio.set_current_time(0.0);
        audio.play().is_ok()
    }

    /// Generate and play a two-tone chime using the Web Audio API.
    fn play_generated_tone() {
        let audio_context = match web_sys::AudioContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                crate::log_info!("Failed to create AudioContext: {:?}", e);
                return;
            }
        };

        // Browsers suspend contexts created before user interaction
        if audio_context.state() == web_sys::AudioContextState::Suspended {
            let _ = audio_context.resume();
        }

        let current_time = audio_context.current_time();

        let gain = match audio_context.create_gain() {
            Ok(g) => g,
            Err(_) => return,
        };

        // Quick attack, short decay
        let gain_param = gain.gain();
        gain_param.set_value_at_time(0.0, current_time).ok();
        gain_param
            .linear_ramp_to_value_at_time(0.3, current_time + 0.01)
            .ok();
        gain_param
            .exponential_ramp_to_value_at_time(0.01, current_time + 0.15)
            .ok();

        gain.connect_with_audio_node(&audio_context.destination())
            .ok();

        if let Ok(osc1) = audio_context.create_oscillator() {
            osc1.set_type(web_sys::OscillatorType::Sine);
            osc1.frequency().set_value(880.0); // A5
            osc1.connect_with_audio_node(&gain).ok();
            osc1.start_with_when(current_time).ok();
            osc1.stop_with_when(current_time + 0.08).ok();
        }

        if let Ok(osc2) = audio_context.create_oscillator() {
            osc2.set_type(web_sys::OscillatorType::Sine);
            osc2.frequency().set_value(659.25); // E5
            osc2.connect_with_audio_node(&gain).ok();
            osc2.start_with_when(current_time + 0.08).ok();
            osc2.stop_with_when(current_time + 0.15).ok();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    /// Play the sound for a newly delivered notification (desktop stub).
    pub fn play_notification() {
        // Desktop audio playback would need a crate like rodio
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::play_notification;

#[cfg(not(target_arch = "wasm32"))]
pub use native::play_notification;
