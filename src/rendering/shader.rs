use gl::types::*;
use std::collections::HashMap;
use std::error::Error;
use std::ffi::CString;
use std::ptr;

/// shader program to use to render
pub(crate) struct ShaderProgram {
    pub(crate) id: GLuint,
    uniform_locations: HashMap<String, GLint>,
}

impl ShaderProgram {
    /// compiles and links a new shader program from source
    pub(crate) fn new(vertex_src: &str, fragment_src: &str) -> Result<Self, Box<dyn Error>> {
        let vs = compile_shader(vertex_src, gl::VERTEX_SHADER)?;
        let fs = match compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
            Ok(fs) => fs,
            Err(e) => {
                unsafe { gl::DeleteShader(vs) };
                return Err(e);
            }
        };
        let id = link_program(vs, fs)?;

        Ok(Self {
            id,
            uniform_locations: HashMap::new(),
        })
    }

    /// sets an uniform location
    pub(crate) unsafe fn add_unif_location(&mut self, name: &str) -> Result<(), Box<dyn Error>> {
        let c_name = CString::new(name)?;
        let unif = gl::GetUniformLocation(self.id, c_name.as_ptr());
        if unif < 0 {
            return Err(format!("uniform '{name}' not found in shader program").into());
        }
        self.uniform_locations.insert(name.to_string(), unif);
        Ok(())
    }

    /// gets an uniform location (-1 if it was never added, which gl silently ignores)
    pub(crate) fn get_unif(&self, name: &str) -> GLint {
        self.uniform_locations.get(name).copied().unwrap_or(-1)
    }

    /// binds the program for the following draw calls
    pub(crate) fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

/// compiles a gl shader
fn compile_shader(src: &str, ty: GLenum) -> Result<GLuint, Box<dyn Error>> {
    let c_str = CString::new(src.as_bytes())?;
    unsafe {
        let shader = gl::CreateShader(ty);
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut status = gl::FALSE as GLint;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        if status != (gl::TRUE as GLint) {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            gl::GetShaderInfoLog(
                shader,
                len,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
            gl::DeleteShader(shader);
            let log = String::from_utf8_lossy(&buf);
            return Err(format!(
                "shader compilation failed: {}",
                log.trim_end_matches('\0')
            )
            .into());
        }
        Ok(shader)
    }
}

/// links a gl shader program
fn link_program(vs: GLuint, fs: GLuint) -> Result<GLuint, Box<dyn Error>> {
    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);

        gl::DetachShader(program, fs);
        gl::DetachShader(program, vs);
        gl::DeleteShader(fs);
        gl::DeleteShader(vs);

        let mut status = gl::FALSE as GLint;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        if status != (gl::TRUE as GLint) {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            gl::GetProgramInfoLog(
                program,
                len,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
            gl::DeleteProgram(program);
            let log = String::from_utf8_lossy(&buf);
            return Err(format!(
                "shader program linking failed: {}",
                log.trim_end_matches('\0')
            )
            .into());
        }
        Ok(program)
    }
}
