//! Waveform player widget
//!
//! Builds a self-contained wavesurfer.js HTML document for one audio clip.
//! The caller hands over raw encoded bytes and a MIME type and embeds the
//! returned markup in an iframe or component slot; this module never touches
//! the filesystem.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Waveform player configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveformPlayer {
    /// Total widget height in px; the wave area is 20 px shorter to leave
    /// room for body padding
    pub height: u32,

    /// Color of the unplayed waveform
    pub wave_color: String,

    /// Color of the played progress region
    pub progress_color: String,
}

impl Default for WaveformPlayer {
    fn default() -> Self {
        Self {
            height: 100,
            wave_color: "#a1a1aa".to_string(), // Zinc-400
            progress_color: "#6366f1".to_string(), // Indigo-500
        }
    }
}

impl WaveformPlayer {
    /// Render the player document for one clip
    ///
    /// # Arguments
    /// * `audio_bytes` - Raw encoded audio, embedded as a base64 data URL
    /// * `mime` - MIME type of the bytes, e.g. "audio/mp3"
    pub fn render(&self, audio_bytes: &[u8], mime: &str) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(audio_bytes);

        format!(
            r##"<!DOCTYPE html>
<html>
<head>
    <script src="https://unpkg.com/wavesurfer.js@7/dist/wavesurfer.min.js"></script>
    <style>
        body {{
            background-color: #18181b; /* Zinc 900, matches card background */
            display: flex;
            flex-direction: row;
            align-items: center;
            margin: 0;
            padding: 0 10px;
            font-family: 'Figtree', sans-serif;
            color: #FAFAFA;
            overflow: hidden;
        }}
        #controls {{
            display: flex;
            align-items: center;
            margin-right: 15px;
        }}
        button {{
            background: none;
            border: none;
            cursor: pointer;
            color: #FAFAFA;
            font-size: 24px;
            transition: transform 0.1s;
            display: flex;
            align-items: center;
            justify-content: center;
        }}
        button:active {{
            transform: scale(0.9);
        }}
        #waveform {{
            flex-grow: 1;
            position: relative;
        }}
    </style>
</head>
<body>
    <div id="controls">
        <button id="playBtn" onclick="togglePlay()">
            <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="currentColor">
                <path d="M8 5v14l11-7z" name="play"/>
                <path d="M6 19h4V5H6v14zm8-14v14h4V5h-4z" name="pause" style="display:none"/>
            </svg>
        </button>
    </div>
    <div id="waveform"></div>

    <script>
        const wavesurfer = WaveSurfer.create({{
            container: '#waveform',
            waveColor: '{wave_color}',
            progressColor: '{progress_color}',
            cursorColor: '#FAFAFA',
            barWidth: 2,
            barRadius: 2,
            cursorWidth: 1,
            height: {wave_height},
            barGap: 2,
            normalize: true,
            url: 'data:{mime};base64,{b64}'
        }});

        const btn = document.getElementById('playBtn');
        const playIcon = btn.querySelector('path[name="play"]');
        const pauseIcon = btn.querySelector('path[name="pause"]');

        function togglePlay() {{
            wavesurfer.playPause();
        }}

        wavesurfer.on('play', () => {{
            playIcon.style.display = 'none';
            pauseIcon.style.display = 'block';
        }});

        wavesurfer.on('pause', () => {{
            playIcon.style.display = 'block';
            pauseIcon.style.display = 'none';
        }});

        wavesurfer.on('finish', () => {{
            playIcon.style.display = 'block';
            pauseIcon.style.display = 'none';
        }});
    </script>
</body>
</html>"##,
            wave_color = self.wave_color,
            progress_color = self.progress_color,
            wave_height = self.height.saturating_sub(20),
            mime = mime,
            b64 = b64,
        )
    }
}
