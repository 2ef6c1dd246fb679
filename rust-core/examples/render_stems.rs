//! Render the full chart set for a separated mix
//!
//! Discovers stem audio in a directory, then writes a mel spectrogram and a
//! PSD comparison per stem plus a waveform player for the mix:
//!
//! ```sh
//! cargo run --example render_stems -- <stem_dir> <mix_file> [out_dir]
//! RUST_LOG=debug cargo run --example render_stems -- demo temp_input.mp3
//! ```

use std::path::PathBuf;

use stemscope::{render, StemManifest, Theme, WaveformPlayer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let stem_dir = args.next().unwrap_or_else(|| ".".to_string());
    let mix_path = args.next().unwrap_or_else(|| "temp_input.mp3".to_string());
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "charts".to_string()));

    std::fs::create_dir_all(&out_dir)?;

    let theme = Theme::default();
    let manifest = StemManifest::from_directory(&stem_dir, ".mp3")?;
    if manifest.is_empty() {
        eprintln!("No stem files found under {}", stem_dir);
        return Ok(());
    }

    for (stem, path) in manifest.iter() {
        let spectrogram =
            render::mel_spectrogram(path, &format!("{} Spectrogram", stem), &theme)?;
        let spectrogram_out = out_dir.join(format!("{}_spectrogram.html", stem.to_lowercase()));
        std::fs::write(&spectrogram_out, spectrogram.to_html())?;

        let density = render::psd_comparison(&mix_path, path, stem, &theme)?;
        let density_out = out_dir.join(format!("{}_psd.html", stem.to_lowercase()));
        density.write_html(&density_out);

        println!(
            "{}: peak {:.1} dB, {} bins -> {} / {}",
            stem,
            spectrogram.db_max(),
            density.num_bins(),
            spectrogram_out.display(),
            density_out.display()
        );
    }

    let player = WaveformPlayer::default();
    let mix_bytes = std::fs::read(&mix_path)?;
    let player_out = out_dir.join("mix_player.html");
    std::fs::write(&player_out, player.render(&mix_bytes, "audio/mp3"))?;
    println!("Player -> {}", player_out.display());

    Ok(())
}
