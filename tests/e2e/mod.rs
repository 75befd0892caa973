// End-to-end integration tests for the Bulk TTS Backend API
//
// Each test starts the real router on an ephemeral port, wired to a fake
// speech provider that returns short WAV clips. Clip length is proportional
// to the text, so the duration of the assembled audio can be checked.
//
// Tests run in parallel by default; every test gets its own server.

mod helpers;
mod test_upload;
