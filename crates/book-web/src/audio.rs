//! Page-flip sound: a short filtered noise burst per step of the walk.

use web_sys as web;

/// Lazily create the `AudioContext`. Called from pointer handlers so the
/// context is born inside a user gesture and never starts suspended.
pub fn ensure_context(slot: &mut Option<web::AudioContext>) {
    if slot.is_some() {
        return;
    }
    match web::AudioContext::new() {
        Ok(ctx) => *slot = Some(ctx),
        Err(e) => log::error!("AudioContext error: {:?}", e),
    }
}

pub fn play_flip(audio_ctx: &web::AudioContext) {
    let sr = audio_ctx.sample_rate();
    let len = (sr * 0.12) as u32;
    let buffer = match audio_ctx.create_buffer(1, len.max(1), sr) {
        Ok(b) => b,
        Err(e) => {
            log::error!("flip buffer error: {:?}", e);
            return;
        }
    };
    // Noise with a squared decay envelope reads as paper sliding on paper.
    let mut samples: Vec<f32> = Vec::with_capacity(len as usize);
    for i in 0..len {
        let t = i as f32 / len as f32;
        let n = (js_sys::Math::random() as f32) * 2.0 - 1.0;
        samples.push(n * (1.0 - t) * (1.0 - t));
    }
    let _ = buffer.copy_to_channel(&mut samples, 0);

    let src = match web::AudioBufferSourceNode::new(audio_ctx) {
        Ok(s) => s,
        Err(e) => {
            log::error!("AudioBufferSourceNode error: {:?}", e);
            return;
        }
    };
    src.set_buffer(Some(&buffer));

    let filter = match web::BiquadFilterNode::new(audio_ctx) {
        Ok(f) => f,
        Err(e) => {
            log::error!("BiquadFilterNode error: {:?}", e);
            return;
        }
    };
    filter.set_type(web::BiquadFilterType::Lowpass);
    filter.frequency().set_value(1800.0);

    let gain = match web::GainNode::new(audio_ctx) {
        Ok(g) => g,
        Err(e) => {
            log::error!("GainNode error: {:?}", e);
            return;
        }
    };
    let now = audio_ctx.current_time();
    gain.gain().set_value(0.35);
    let _ = gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.12);

    let _ = src.connect_with_audio_node(&filter);
    let _ = filter.connect_with_audio_node(&gain);
    let _ = gain.connect_with_audio_node(&audio_ctx.destination());
    let _ = src.start();
}
