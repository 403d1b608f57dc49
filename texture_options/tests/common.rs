/// Create a device for tests that need one. Returns `None` on machines
/// without a usable adapter so those tests can bail out quietly.
pub fn setup_wgpu(required_features: wgpu::Features) -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = if cfg!(windows) {
        wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::DX12,
            ..Default::default()
        })
    } else {
        wgpu::Instance::default()
    };

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        force_fallback_adapter: false,
        compatible_surface: None,
    }))
    .ok()?;

    if !adapter.features().contains(required_features) {
        return None;
    }

    let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: None,
        required_features,
        required_limits: wgpu::Limits::default().using_resolution(adapter.limits()),
        memory_hints: wgpu::MemoryHints::Performance,
        experimental_features: wgpu::ExperimentalFeatures::disabled(),
        trace: wgpu::Trace::Off,
    }))
    .ok()?;

    device.on_uncaptured_error(std::sync::Arc::new(|e| panic!("uncaptured wgpu error: {e}")));

    Some((device, queue))
}
